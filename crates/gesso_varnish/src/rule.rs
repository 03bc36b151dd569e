//! Rule trait and registry for lint rules.

use crate::context::LintContext;
use crate::diagnostic::Severity;

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "material/theme-mixin-api")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Whether some of the rule's findings carry edits
    pub fixable: bool,
    /// Suggested severity for the harness
    pub default_severity: Severity,
}

/// Rule trait for implementing lint rules
///
/// A rule inspects the whole tree held by the context and pushes findings
/// into it. Rules must not keep state between files.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Check one style sheet
    fn check(&self, ctx: &mut LintContext<'_>);
}

/// Registry holding all enabled lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Create registry with all built-in rules enabled
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::rules::material::ThemeMixinApi));
        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
