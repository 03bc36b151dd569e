//! Lint context for rule execution.
//!
//! The context is the collection side of the diagnostic/fix sink: rules push
//! findings into it while the tree is only borrowed. What happens to them
//! (reported or applied) is decided once per run by the linter.

use gesso_relief::ast::StyleSheet;
use gesso_relief::NodePath;
use rustc_hash::FxHashSet;

use crate::disable::DisabledRules;
use crate::fix::Finding;

/// Per-file state handed to every rule.
pub struct LintContext<'s> {
    /// Tree being linted
    pub sheet: &'s StyleSheet,
    /// Source file path, empty when the harness did not supply one
    pub filename: &'s str,
    /// Current rule name (set by the linter before calling each rule)
    pub current_rule: &'static str,
    findings: Vec<Finding>,
    disabled: DisabledRules,
    enabled_rules: Option<&'s FxHashSet<String>>,
    suppressed_count: usize,
}

impl<'s> LintContext<'s> {
    const INITIAL_FINDINGS_CAPACITY: usize = 16;

    pub fn new(sheet: &'s StyleSheet) -> Self {
        Self {
            sheet,
            filename: sheet.file.as_deref().unwrap_or(""),
            current_rule: "",
            findings: Vec::with_capacity(Self::INITIAL_FINDINGS_CAPACITY),
            disabled: DisabledRules::parse(sheet),
            enabled_rules: None,
            suppressed_count: 0,
        }
    }

    /// Restrict reporting to the named rules (`None` enables all)
    #[inline]
    pub fn set_enabled_rules(&mut self, rules: Option<&'s FxHashSet<String>>) {
        self.enabled_rules = rules;
    }

    #[inline]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        match self.enabled_rules {
            Some(set) => set.contains(rule_name),
            None => true,
        }
    }

    /// Record a finding owned by the node at `owner`.
    ///
    /// The owner decides whether an inline directive suppresses the finding;
    /// the diagnostic itself may point at a child of the owner.
    pub fn report(&mut self, owner: &NodePath, finding: Finding) {
        if self.disabled.is_disabled(self.current_rule, owner) {
            self.suppressed_count += 1;
            return;
        }
        self.findings.push(finding);
    }

    pub fn report_all(&mut self, owner: &NodePath, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.report(owner, finding);
        }
    }

    /// Findings dropped by inline disable directives
    #[inline]
    pub fn suppressed_count(&self) -> usize {
        self.suppressed_count
    }

    #[inline]
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}
