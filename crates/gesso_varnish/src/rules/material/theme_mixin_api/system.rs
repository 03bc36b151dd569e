//! Validation of `density`, `color` and `typography` mixins.
//!
//! These accept either their own configuration or a whole theme, and must
//! extract the configuration before using it:
//!
//! ```scss
//! @mixin color($config-or-theme) {
//!   $config: theming.get-color-config($config-or-theme);
//!   ...
//! }
//! ```
//!
//! A mixin without statements is an intentional stub and is left alone.

use std::borrow::Cow;

use compact_str::{format_compact, CompactString};
use gesso_relief::ast::{Declaration, StyleNode};
use once_cell::sync::Lazy;
use regex::Regex;

use super::diagnostic;
use super::locator::{LocatedMixin, MixinKind};
use crate::fix::{Finding, TreeEdit};

pub(super) const SYSTEM_ARG: &str = "$config-or-theme";

static LINE_BREAK_INDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n]\s+").expect("valid line break pattern"));

/// Variable the extracted configuration must be assigned to
pub(super) fn expected_variable(kind: MixinKind) -> &'static str {
    match kind {
        MixinKind::Density => "$density-scale",
        _ => "$config",
    }
}

/// Accepted extraction expressions, preferred one first
pub(super) fn extraction_expressions(kind: MixinKind) -> Vec<CompactString> {
    match kind {
        MixinKind::Typography => vec![
            CompactString::const_new(
                "typography.private-typography-to-2014-config(\
                 theming.get-typography-config($config-or-theme))",
            ),
            CompactString::const_new(
                "typography.private-typography-to-2018-config(\
                 theming.get-typography-config($config-or-theme))",
            ),
        ],
        kind => vec![format_compact!(
            "theming.get-{}-config({SYSTEM_ARG})",
            kind.as_str()
        )],
    }
}

/// Drop line breaks together with the indentation that follows them
fn strip_newlines_and_indentation(value: &str) -> Cow<'_, str> {
    LINE_BREAK_INDENT.replace_all(value, "")
}

pub(super) fn validate(mixin: &LocatedMixin<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    let path = &mixin.path;
    let rule = mixin.rule;

    match mixin.args.as_slice() {
        [arg] if *arg == SYSTEM_ARG => {}
        [arg] => findings.push(Finding::Fixable {
            diagnostic: diagnostic(
                format!("Expected first mixin argument to be called `{SYSTEM_ARG}`."),
                path.clone(),
                &rule.source,
            ),
            edit: TreeEdit::replace_param(path.clone(), *arg, SYSTEM_ARG),
        }),
        _ => findings.push(
            diagnostic(
                "Expected mixin to only declare a single argument.",
                path.clone(),
                &rule.source,
            )
            .into(),
        ),
    }

    let variable = expected_variable(mixin.kind);
    let expressions = extraction_expressions(mixin.kind);

    let mut extraction: Option<(usize, &Declaration)> = None;
    let mut statement_count = 0usize;
    for (index, child) in rule.children().iter().enumerate() {
        if child.is_comment() {
            continue;
        }
        statement_count += 1;
        if let StyleNode::Declaration(decl) = child {
            let value = strip_newlines_and_indentation(&decl.value);
            if expressions.iter().any(|expr| expr.as_str() == value.as_ref()) {
                extraction = Some((index, decl));
                break;
            }
        }
    }

    match extraction {
        None if statement_count > 0 => {
            let mut message = CompactString::const_new(
                "Config is not extracted. Consumers could pass a theme object. \
                 Extract the configuration by using one of the following:",
            );
            for expr in &expressions {
                message.push('\n');
                message.push_str(variable);
                message.push_str(": ");
                message.push_str(expr);
            }
            findings.push(Finding::Fixable {
                diagnostic: diagnostic(message, path.clone(), &rule.source),
                edit: TreeEdit::insert_before(
                    path.clone(),
                    0,
                    Declaration::new(variable, expressions[0].clone()),
                ),
            });
        }
        None => {}
        Some((index, decl)) if decl.prop != variable => findings.push(
            diagnostic(
                format!("For consistency, variable for configuration should be called: {variable}"),
                path.child(index),
                &decl.source,
            )
            .into(),
        ),
        Some(_) => {}
    }

    findings
}
