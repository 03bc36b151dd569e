//! Diagnostic types for gesso_varnish.
//!
//! Uses `CompactString` for message storage. Diagnostics carry no severity;
//! how seriously to treat a rule is the harness's decision, informed by
//! [`RuleMeta::default_severity`](crate::RuleMeta).

use compact_str::CompactString;
use gesso_relief::ast::SourceLocation;
use gesso_relief::NodePath;
use serde::Serialize;

/// Suggested severity for a rule's diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// A reported convention violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintDiagnostic {
    /// Rule that triggered this diagnostic
    pub rule_name: &'static str,
    pub message: CompactString,
    /// Node the diagnostic is attached to
    pub node: NodePath,
    /// 1-indexed line of the node, if the parser recorded one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    /// Related nodes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

/// Secondary node referenced by a diagnostic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub message: CompactString,
    pub node: NodePath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl LintDiagnostic {
    #[inline]
    pub fn new(
        rule_name: &'static str,
        message: impl Into<CompactString>,
        node: NodePath,
        source: &SourceLocation,
    ) -> Self {
        Self {
            rule_name,
            message: message.into(),
            node,
            line: source.start.map(|p| p.line),
            column: source.start.map(|p| p.column),
            labels: Vec::new(),
        }
    }

    /// Add a related label
    #[inline]
    pub fn with_label(
        mut self,
        message: impl Into<CompactString>,
        node: NodePath,
        source: &SourceLocation,
    ) -> Self {
        self.labels.push(Label {
            message: message.into(),
            node,
            line: source.start.map(|p| p.line),
        });
        self
    }
}

/// Summary of lint results
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintSummary {
    pub diagnostic_count: usize,
    pub edit_count: usize,
    pub file_count: usize,
}
