//! Main linter entry point.

use gesso_relief::ast::StyleSheet;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use crate::config::RunConfig;
use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary};
use crate::error::VarnishError;
use crate::fix::{apply_edits, Finding};
use crate::rule::{Rule, RuleRegistry};

/// Lint result for a single file
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    /// Filename that was linted
    pub filename: String,
    /// Collected diagnostics, in document order per rule
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of edits applied to the tree (fix mode only)
    pub edits_applied: usize,
    /// Findings dropped by inline disable directives
    pub suppressed: usize,
}

impl LintResult {
    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main linter struct.
///
/// Holds no per-file state, so one linter can be shared across threads that
/// each own the trees they lint.
pub struct Linter {
    registry: RuleRegistry,
    config: RunConfig,
    /// Optional set of enabled rule names (if None, all rules are enabled)
    enabled_rules: Option<FxHashSet<String>>,
}

impl Linter {
    /// Create a new linter with recommended rules in report mode
    #[inline]
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::with_recommended())
    }

    /// Create a linter with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            config: RunConfig::default(),
            enabled_rules: None,
        }
    }

    /// Set the run configuration
    #[inline]
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Set enabled rules (if None, all rules are enabled)
    #[inline]
    pub fn with_enabled_rules(mut self, rules: Option<Vec<String>>) -> Self {
        self.enabled_rules = rules.map(|r| r.into_iter().collect());
        self
    }

    /// Lint one tree according to the run configuration.
    ///
    /// In fix mode repairable findings are applied to `sheet` and only the
    /// remaining diagnostics are returned. In report mode the tree is left
    /// untouched.
    pub fn lint(&self, sheet: &mut StyleSheet) -> Result<LintResult, VarnishError> {
        if self.config.fix {
            self.fix(sheet)
        } else {
            Ok(self.check(sheet))
        }
    }

    /// Report every finding without modifying the tree
    pub fn check(&self, sheet: &StyleSheet) -> LintResult {
        let (findings, suppressed) = self.collect(sheet);
        let diagnostics: Vec<LintDiagnostic> = findings
            .into_iter()
            .map(|finding| match finding {
                Finding::Diagnostic(diagnostic) | Finding::Fixable { diagnostic, .. } => {
                    diagnostic
                }
            })
            .collect();

        debug!(
            file = sheet.file.as_deref().unwrap_or(""),
            diagnostics = diagnostics.len(),
            "checked style sheet"
        );

        LintResult {
            filename: sheet.file.clone().unwrap_or_default(),
            diagnostics,
            edits_applied: 0,
            suppressed,
        }
    }

    /// Apply every repairable finding and report the rest
    pub fn fix(&self, sheet: &mut StyleSheet) -> Result<LintResult, VarnishError> {
        let (findings, suppressed) = self.collect(sheet);
        let mut diagnostics = Vec::new();
        let mut edits = Vec::new();
        for finding in findings {
            match finding {
                Finding::Diagnostic(diagnostic) => diagnostics.push(diagnostic),
                Finding::Fixable { edit, .. } => edits.push(edit),
            }
        }

        let edits_applied = apply_edits(sheet, edits)?;
        debug!(
            file = sheet.file.as_deref().unwrap_or(""),
            diagnostics = diagnostics.len(),
            edits = edits_applied,
            "fixed style sheet"
        );

        Ok(LintResult {
            filename: sheet.file.clone().unwrap_or_default(),
            diagnostics,
            edits_applied,
            suppressed,
        })
    }

    /// Lint a tree supplied as postcss JSON.
    ///
    /// Returns the result together with the tree encoded back to JSON, which
    /// carries the applied edits in fix mode.
    pub fn lint_json(&self, json: &str) -> Result<(LintResult, String), VarnishError> {
        let mut sheet = StyleSheet::from_json(json)?;
        let result = self.lint(&mut sheet)?;
        Ok((result, sheet.to_json()?))
    }

    /// Lint multiple trees and aggregate results
    pub fn lint_files(
        &self,
        sheets: &mut [StyleSheet],
    ) -> Result<(Vec<LintResult>, LintSummary), VarnishError> {
        let mut results = Vec::with_capacity(sheets.len());
        let mut summary = LintSummary::default();

        for sheet in sheets.iter_mut() {
            let result = self.lint(sheet)?;
            summary.diagnostic_count += result.diagnostics.len();
            summary.edit_count += result.edits_applied;
            results.push(result);
        }

        summary.file_count = sheets.len();
        Ok((results, summary))
    }

    /// Run every enabled rule over `sheet`
    fn collect(&self, sheet: &StyleSheet) -> (Vec<Finding>, usize) {
        if !self.config.enabled {
            debug!("linter disabled, skipping");
            return (Vec::new(), 0);
        }

        let mut ctx = LintContext::new(sheet);
        ctx.set_enabled_rules(self.enabled_rules.as_ref());

        for rule in self.registry.rules() {
            let name = rule.meta().name;
            if !ctx.is_rule_enabled(name) {
                continue;
            }
            ctx.current_rule = name;
            rule.check(&mut ctx);
        }

        let suppressed = ctx.suppressed_count();
        (ctx.into_findings(), suppressed)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
