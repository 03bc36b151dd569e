//! Locating and classifying theme mixins.

use gesso_relief::ast::{AtRule, StyleNode, StyleSheet};
use gesso_relief::NodePath;
use once_cell::sync::Lazy;
use regex::Regex;

/// `color($config-or-theme)` -> (`color`, `$config-or-theme`)
static MIXIN_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(density|color|typography|theme)\((.*)\)$").expect("valid mixin header pattern")
});

/// Kind of a convention-relevant mixin, taken from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixinKind {
    Theme,
    Density,
    Color,
    Typography,
}

impl MixinKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "theme" => Some(Self::Theme),
            "density" => Some(Self::Density),
            "color" => Some(Self::Color),
            "typography" => Some(Self::Typography),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Density => "density",
            Self::Color => "color",
            Self::Typography => "typography",
        }
    }
}

/// A public theme mixin found in a style sheet
#[derive(Debug, Clone)]
pub struct LocatedMixin<'s> {
    pub path: NodePath,
    pub rule: &'s AtRule,
    pub kind: MixinKind,
    /// Trimmed arguments from the mixin header
    pub args: Vec<&'s str>,
}

/// Library-internal mixins are exempt from the convention.
#[inline]
fn is_private(params: &str) -> bool {
    params.starts_with('_') || params.starts_with("private-")
}

/// Split an argument list on commas.
///
/// Commas inside map or list literals are not recognised, so a mixin whose
/// argument is such a literal is seen as having several arguments.
pub fn split_args(args: &str) -> Vec<&str> {
    if args.trim().is_empty() {
        return Vec::new();
    }
    args.split(',').map(str::trim).collect()
}

/// Classify a `@mixin` parameter string
pub fn parse_header(params: &str) -> Option<(MixinKind, &str)> {
    let captures = MIXIN_HEADER.captures(params)?;
    let kind = MixinKind::from_name(captures.get(1)?.as_str())?;
    Some((kind, captures.get(2)?.as_str()))
}

/// Find every public theme mixin in document order
pub fn locate_mixins(sheet: &StyleSheet) -> Vec<LocatedMixin<'_>> {
    let mut mixins = Vec::new();
    sheet.walk(|path, node| {
        let StyleNode::AtRule(rule) = node else {
            return;
        };
        if rule.name != "mixin" || is_private(&rule.params) {
            return;
        }
        if let Some((kind, args)) = parse_header(&rule.params) {
            mixins.push(LocatedMixin {
                path: path.clone(),
                rule,
                kind,
                args: split_args(args),
            });
        }
    });
    mixins
}
