//! Inline disable directives.
//!
//! ```scss
//! /* gesso-disable material/theme-mixin-api */
//!
//! // gesso-disable-next-line
//! @mixin theme($theme) { ... }
//! ```
//!
//! `gesso-disable` must be a top-level comment and applies to the whole file.
//! `gesso-disable-next-line` applies to the following sibling node. Both take
//! an optional whitespace-separated list of rule names; without one, every
//! rule is disabled.

use compact_str::CompactString;
use gesso_relief::ast::StyleSheet;
use gesso_relief::NodePath;
use rustc_hash::{FxHashMap, FxHashSet};

const DISABLE: &str = "gesso-disable";
const DISABLE_NEXT_LINE: &str = "gesso-disable-next-line";

#[derive(Debug, Clone, PartialEq, Eq)]
enum RuleSet {
    All,
    Only(FxHashSet<CompactString>),
}

impl RuleSet {
    fn parse(rest: &str) -> Self {
        let names: FxHashSet<CompactString> = rest
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|name| !name.is_empty())
            .map(CompactString::from)
            .collect();
        if names.is_empty() {
            RuleSet::All
        } else {
            RuleSet::Only(names)
        }
    }

    fn contains(&self, rule_name: &str) -> bool {
        match self {
            RuleSet::All => true,
            RuleSet::Only(names) => names.contains(rule_name),
        }
    }

    fn merge(&mut self, other: RuleSet) {
        match other {
            RuleSet::All => *self = RuleSet::All,
            RuleSet::Only(more) => {
                if let RuleSet::Only(names) = self {
                    names.extend(more);
                }
            }
        }
    }
}

/// Rules disabled by comments in one style sheet
#[derive(Debug, Default)]
pub struct DisabledRules {
    file: Option<RuleSet>,
    next_node: FxHashMap<NodePath, RuleSet>,
}

impl DisabledRules {
    /// Collect directives from every comment in `sheet`
    pub fn parse(sheet: &StyleSheet) -> Self {
        let mut result = Self::default();
        sheet.walk(|path, node| {
            let Some(comment) = node.as_comment() else {
                return;
            };
            let text = comment.text.trim();
            // Checked first: `gesso-disable` is a prefix of it.
            if let Some(rest) = directive_arguments(text, DISABLE_NEXT_LINE) {
                let mut next = path.clone();
                if let Some(index) = next.pop() {
                    next.push(index + 1);
                }
                let rules = RuleSet::parse(rest);
                match result.next_node.get_mut(&next) {
                    Some(existing) => existing.merge(rules),
                    None => {
                        result.next_node.insert(next, rules);
                    }
                }
            } else if let Some(rest) = directive_arguments(text, DISABLE) {
                if path.depth() == 1 {
                    let rules = RuleSet::parse(rest);
                    match result.file.as_mut() {
                        Some(existing) => existing.merge(rules),
                        None => result.file = Some(rules),
                    }
                }
            }
        });
        result
    }

    /// Whether findings of `rule_name` owned by the node at `path` are suppressed
    pub fn is_disabled(&self, rule_name: &str, path: &NodePath) -> bool {
        if self.file.as_ref().is_some_and(|rules| rules.contains(rule_name)) {
            return true;
        }
        self.next_node
            .get(path)
            .is_some_and(|rules| rules.contains(rule_name))
    }
}

/// Text following `directive` when `text` is exactly that directive or the
/// directive followed by whitespace
fn directive_arguments<'t>(text: &'t str, directive: &str) -> Option<&'t str> {
    let rest = text.strip_prefix(directive)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}
