//! SCSS stringifier.
//!
//! Prints a tree with two-space indentation. Original formatting (`raws`) is
//! not tracked, so output is normalized rather than byte-identical to the
//! parsed file.

use crate::ast::{AtRule, StyleNode, StyleSheet};

const INDENT: &str = "  ";

struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
            depth: 0,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn print_nodes(&mut self, nodes: &[StyleNode]) {
        for node in nodes {
            self.print_node(node);
        }
    }

    fn print_node(&mut self, node: &StyleNode) {
        self.indent();
        match node {
            StyleNode::AtRule(rule) => self.print_at_rule(rule),
            StyleNode::Rule(rule) => {
                self.out.push_str(&rule.selector);
                self.print_block(&rule.nodes);
            }
            StyleNode::Declaration(decl) => {
                self.out.push_str(&decl.prop);
                self.out.push_str(": ");
                self.out.push_str(&decl.value);
                self.out.push_str(";\n");
            }
            StyleNode::Comment(comment) => {
                self.out.push_str("/* ");
                self.out.push_str(&comment.text);
                self.out.push_str(" */\n");
            }
        }
    }

    fn print_at_rule(&mut self, rule: &AtRule) {
        self.out.push('@');
        self.out.push_str(&rule.name);
        if !rule.params.is_empty() {
            self.out.push(' ');
            self.out.push_str(&rule.params);
        }
        match &rule.nodes {
            Some(nodes) => self.print_block(nodes),
            None => self.out.push_str(";\n"),
        }
    }

    fn print_block(&mut self, nodes: &[StyleNode]) {
        if nodes.is_empty() {
            self.out.push_str(" {}\n");
            return;
        }
        self.out.push_str(" {\n");
        self.depth += 1;
        self.print_nodes(nodes);
        self.depth -= 1;
        self.indent();
        self.out.push_str("}\n");
    }
}

impl StyleSheet {
    /// Print the tree as SCSS text
    pub fn to_scss(&self) -> String {
        let mut printer = Printer::new();
        printer.print_nodes(&self.nodes);
        printer.out
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{AtRule, Comment, Declaration, QualifiedRule, StyleSheet};

    #[test]
    fn test_print_nested_tree() {
        let sheet = StyleSheet::new(
            None,
            vec![
                AtRule::new("use", "'sass:map'").into(),
                Comment::new("Button theme").into(),
                AtRule::block(
                    "mixin",
                    "theme($theme-or-color-config)",
                    vec![
                        Declaration::new("$theme", "theming.private-legacy-get-theme($theme-or-color-config)")
                            .into(),
                        AtRule::block(
                            "include",
                            "theming.private-check-duplicate-theme-styles($theme, 'mat-button')",
                            vec![QualifiedRule::new(
                                ".mat-button",
                                vec![Declaration::new("color", "red").into()],
                            )
                            .into()],
                        )
                        .into(),
                    ],
                )
                .into(),
                AtRule::block("mixin", "density($config-or-theme)", vec![]).into(),
            ],
        );

        insta::assert_snapshot!(sheet.to_scss(), @r"
        @use 'sass:map';
        /* Button theme */
        @mixin theme($theme-or-color-config) {
          $theme: theming.private-legacy-get-theme($theme-or-color-config);
          @include theming.private-check-duplicate-theme-styles($theme, 'mat-button') {
            .mat-button {
              color: red;
            }
          }
        }
        @mixin density($config-or-theme) {}
        ");
    }

    #[test]
    fn test_print_at_rule_without_params() {
        let sheet = StyleSheet::new(None, vec![AtRule::block("content", "", vec![]).into()]);
        assert_eq!(sheet.to_scss(), "@content {}\n");
    }
}
