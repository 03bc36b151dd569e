//! Findings and tree edits.
//!
//! Rules never touch the tree. They return [`Finding`]s; the linter either
//! surfaces their diagnostics (report mode) or applies their edits (fix mode).

use compact_str::CompactString;
use gesso_relief::ast::{AtRule, StyleNode, StyleSheet};
use gesso_relief::NodePath;
use tracing::debug;

use crate::diagnostic::LintDiagnostic;
use crate::error::VarnishError;

/// In-place mutation of the at-rule at `target`
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEdit {
    pub target: NodePath,
    pub op: EditOp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    /// Insert `node` before the child at `index`
    InsertBefore { index: usize, node: StyleNode },
    /// Substitute the first occurrence of `from` inside the parenthesized
    /// argument list of the target's parameters
    ReplaceParam {
        from: CompactString,
        to: CompactString,
    },
}

impl TreeEdit {
    pub fn insert_before(target: NodePath, index: usize, node: impl Into<StyleNode>) -> Self {
        Self {
            target,
            op: EditOp::InsertBefore {
                index,
                node: node.into(),
            },
        }
    }

    pub fn replace_param(
        target: NodePath,
        from: impl Into<CompactString>,
        to: impl Into<CompactString>,
    ) -> Self {
        Self {
            target,
            op: EditOp::ReplaceParam {
                from: from.into(),
                to: to.into(),
            },
        }
    }

    /// Apply this edit to `sheet`
    pub fn apply(self, sheet: &mut StyleSheet) -> Result<(), VarnishError> {
        let Some(rule) = sheet.at_rule_mut(&self.target) else {
            return Err(VarnishError::StaleEdit {
                target: self.target,
            });
        };
        match self.op {
            EditOp::InsertBefore { index, node } => {
                rule.insert_before(index, node);
                Ok(())
            }
            EditOp::ReplaceParam { from, to } => {
                if replace_param(rule, &from, &to) {
                    Ok(())
                } else {
                    Err(VarnishError::ParamNotFound {
                        target: self.target,
                        param: from.into(),
                    })
                }
            }
        }
    }
}

fn replace_param(rule: &mut AtRule, from: &str, to: &str) -> bool {
    let args_start = rule.params.find('(').map_or(0, |i| i + 1);
    let Some(offset) = rule.params[args_start..].find(from) else {
        return false;
    };
    let start = args_start + offset;
    let mut params = CompactString::with_capacity(rule.params.len() - from.len() + to.len());
    params.push_str(&rule.params[..start]);
    params.push_str(to);
    params.push_str(&rule.params[start + from.len()..]);
    rule.params = params;
    true
}

/// Outcome of validating one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// A violation that can only be reported
    Diagnostic(LintDiagnostic),
    /// A violation with a repair. The diagnostic is surfaced only in report mode.
    Fixable {
        diagnostic: LintDiagnostic,
        edit: TreeEdit,
    },
}

impl Finding {
    #[inline]
    pub fn diagnostic(&self) -> &LintDiagnostic {
        match self {
            Finding::Diagnostic(diagnostic) | Finding::Fixable { diagnostic, .. } => diagnostic,
        }
    }

    #[inline]
    pub fn is_fixable(&self) -> bool {
        matches!(self, Finding::Fixable { .. })
    }
}

impl From<LintDiagnostic> for Finding {
    fn from(diagnostic: LintDiagnostic) -> Self {
        Finding::Diagnostic(diagnostic)
    }
}

/// Apply edits collected from one traversal of `sheet`.
///
/// Paths in `edits` refer to the tree as it was before any edit. Targets are
/// processed in reverse document order so that an insertion into a block
/// never shifts a path that is still to be used; edits sharing a target keep
/// their emission order.
pub fn apply_edits(sheet: &mut StyleSheet, mut edits: Vec<TreeEdit>) -> Result<usize, VarnishError> {
    let count = edits.len();
    // Stable: edits of one target stay in emission order. Lexicographic path
    // order is document pre-order.
    edits.sort_by(|a, b| a.target.cmp(&b.target));

    let mut end = edits.len();
    while end > 0 {
        let target = edits[end - 1].target.clone();
        let mut start = end - 1;
        while start > 0 && edits[start - 1].target == target {
            start -= 1;
        }
        for edit in edits.drain(start..end) {
            debug!(target = %edit.target, op = ?edit.op, "applying edit");
            edit.apply(sheet)?;
        }
        end = start;
    }

    Ok(count)
}
