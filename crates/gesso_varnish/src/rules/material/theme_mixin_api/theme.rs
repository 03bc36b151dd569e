//! Validation of `theme` mixins.
//!
//! A theme mixin takes `$theme-or-color-config`, converts it with the legacy
//! extraction as its first statement, and nests everything else inside the
//! duplicate styles check:
//!
//! ```scss
//! @mixin theme($theme-or-color-config) {
//!   $theme: theming.private-legacy-get-theme($theme-or-color-config);
//!   @include theming.private-check-duplicate-theme-styles($theme, 'mat-button') {
//!     ...
//!   }
//! }
//! ```

use compact_str::{format_compact, CompactString};
use gesso_relief::ast::{AtRule, Declaration, StyleNode};

use super::diagnostic;
use super::locator::LocatedMixin;
use crate::fix::{Finding, TreeEdit};

pub(super) const THEME_ARG: &str = "$theme-or-color-config";
pub(super) const THEME_VAR: &str = "$theme";
pub(super) const LEGACY_EXTRACTION: &str =
    "theming.private-legacy-get-theme($theme-or-color-config)";

/// `@include` parameters of the duplicate styles check for `component`
pub(super) fn duplicate_check_expr(component: &str) -> CompactString {
    format_compact!("theming.private-check-duplicate-theme-styles({THEME_VAR}, '{component}')")
}

pub(super) fn validate(mixin: &LocatedMixin<'_>, component: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    let path = &mixin.path;
    let rule = mixin.rule;

    match mixin.args.as_slice() {
        [arg] if *arg == THEME_ARG => {}
        [arg] => findings.push(Finding::Fixable {
            diagnostic: diagnostic(
                format!("Expected first mixin argument to be called `{THEME_ARG}`."),
                path.clone(),
                &rule.source,
            ),
            edit: TreeEdit::replace_param(path.clone(), *arg, THEME_ARG),
        }),
        _ => findings.push(
            diagnostic(
                "Expected theme mixin to only declare a single argument.",
                path.clone(),
                &rule.source,
            )
            .into(),
        ),
    }

    let duplicate_check = duplicate_check_expr(component);
    let body = classify_body(rule, &duplicate_check);

    match body.legacy {
        None => findings.push(Finding::Fixable {
            diagnostic: diagnostic(
                format!(
                    "Legacy color API is not handled. Consumers could pass in a color \
                     configuration directly to the theme mixin. For backwards compatibility, \
                     use the following declaration to retrieve the theme object: \
                     {THEME_VAR}: {LEGACY_EXTRACTION}"
                ),
                path.clone(),
                &rule.source,
            ),
            edit: TreeEdit::insert_before(
                path.clone(),
                0,
                Declaration::new(THEME_VAR, LEGACY_EXTRACTION),
            ),
        }),
        Some((index, decl)) if decl.prop != THEME_VAR => findings.push(
            diagnostic(
                format!("For consistency, theme variable should be called: {THEME_VAR}"),
                path.child(index),
                &decl.source,
            )
            .into(),
        ),
        Some(_) => {}
    }

    if !body.has_duplicate_check {
        // Right after the legacy extraction, whether existing or synthesized at 0.
        let check_index = body.legacy.map_or(1, |(index, _)| index + 1);
        findings.push(Finding::Fixable {
            diagnostic: diagnostic(
                format!(
                    "Missing check for duplicative theme styles. Please include the \
                     duplicate styles check mixin: {duplicate_check}"
                ),
                path.clone(),
                &rule.source,
            ),
            edit: TreeEdit::insert_before(
                path.clone(),
                check_index,
                AtRule::new("include", duplicate_check.clone()),
            ),
        });
    }

    if let Some(index) = body.first_stray {
        let stray = &rule.children()[index];
        findings.push(
            diagnostic(
                format!(
                    "Expected nodes other than the \"{LEGACY_EXTRACTION}\" declaration to be \
                     nested inside the duplicate styles check."
                ),
                path.clone(),
                &rule.source,
            )
            .with_label("not nested inside the check", path.child(index), stray.source())
            .into(),
        );
    }

    if let Some((index, decl)) = body.legacy {
        if !body.legacy_is_first {
            findings.push(
                diagnostic(
                    "Legacy configuration should be retrieved first in theme mixin.",
                    path.child(index),
                    &decl.source,
                )
                .into(),
            );
        }
    }

    findings
}

/// Direct children of a theme mixin, sorted into the prologue contract
struct ThemeBody<'s> {
    /// Index and node of the first legacy extraction declaration
    legacy: Option<(usize, &'s Declaration)>,
    legacy_is_first: bool,
    has_duplicate_check: bool,
    /// Index of the first statement that belongs inside the check
    first_stray: Option<usize>,
}

fn classify_body<'s>(rule: &'s AtRule, duplicate_check: &str) -> ThemeBody<'s> {
    let mut body = ThemeBody {
        legacy: None,
        legacy_is_first: false,
        has_duplicate_check: false,
        first_stray: None,
    };
    let mut seen_statement = false;

    for (index, child) in rule.children().iter().enumerate() {
        match child {
            StyleNode::Comment(_) => continue,
            StyleNode::Declaration(decl)
                if body.legacy.is_none() && decl.value == LEGACY_EXTRACTION =>
            {
                body.legacy = Some((index, decl));
                body.legacy_is_first = !seen_statement;
            }
            StyleNode::AtRule(include)
                if !body.has_duplicate_check
                    && include.name == "include"
                    && include.params == duplicate_check =>
            {
                body.has_duplicate_check = true;
            }
            StyleNode::AtRule(_) | StyleNode::Rule(_) | StyleNode::Declaration(_) => {
                body.first_stray.get_or_insert(index);
            }
        }
        seen_statement = true;
    }

    body
}
