//! End-to-end tests for the `material/theme-mixin-api` rule.

use gesso_relief::ast::{AtRule, Comment, Declaration, QualifiedRule, StyleNode, StyleSheet};
use gesso_relief::NodePath;
use gesso_varnish::{Linter, RunConfig};

const BUTTON_THEME: &str = "src/material/button/_button-theme.scss";
const LEGACY: &str = "theming.private-legacy-get-theme($theme-or-color-config)";
const BUTTON_CHECK: &str = "theming.private-check-duplicate-theme-styles($theme, 'mat-button')";

fn mixin(params: &str, body: Vec<StyleNode>) -> StyleNode {
    AtRule::block("mixin", params, body).into()
}

fn decl(prop: &str, value: &str) -> StyleNode {
    Declaration::new(prop, value).into()
}

fn sheet(file: &str, nodes: Vec<StyleNode>) -> StyleSheet {
    StyleSheet::new(Some(file), nodes)
}

fn report(sheet: &StyleSheet) -> Vec<String> {
    Linter::new()
        .check(sheet)
        .diagnostics
        .into_iter()
        .map(|d| d.message.to_string())
        .collect()
}

fn fix(sheet: &mut StyleSheet) -> gesso_varnish::LintResult {
    Linter::new()
        .with_config(RunConfig::fix())
        .lint(sheet)
        .unwrap()
}

mod scenarios {
    use super::*;

    fn conforming_theme(arg: &str) -> StyleNode {
        mixin(
            &format!("theme({arg})"),
            vec![
                decl("$theme", LEGACY),
                AtRule::block("include", BUTTON_CHECK, vec![decl("color", "red")]).into(),
            ],
        )
    }

    #[test]
    fn conforming_theme_mixin() {
        let sheet = sheet(
            "src/material/button/_button-theme.scss",
            vec![conforming_theme("$theme-or-color-config")],
        );
        assert!(report(&sheet).is_empty());
    }

    #[test]
    fn misnamed_theme_argument() {
        let mut sheet = sheet(BUTTON_THEME, vec![conforming_theme("$config")]);
        assert_eq!(
            report(&sheet),
            ["Expected first mixin argument to be called `$theme-or-color-config`."]
        );

        let result = fix(&mut sheet);
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.edits_applied, 1);
        let rule = sheet.nodes[0].as_at_rule().unwrap();
        assert_eq!(rule.params, "theme($theme-or-color-config)");
    }

    #[test]
    fn theme_mixin_without_prologue() {
        let mut sheet = sheet(
            BUTTON_THEME,
            vec![mixin("theme($theme-or-color-config)", vec![decl("color", "red")])],
        );
        let messages = report(&sheet);
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("Legacy color API is not handled."));
        assert!(messages[1].starts_with("Missing check for duplicative theme styles."));
        assert!(messages[2].starts_with("Expected nodes other than"));

        // Only the stray statement survives a fix.
        let result = fix(&mut sheet);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].node, NodePath::from_indices([0]));
        assert_eq!(result.diagnostics[0].labels[0].node, NodePath::from_indices([0, 0]));
        insta::assert_snapshot!(sheet.to_scss(), @r"
        @mixin theme($theme-or-color-config) {
          $theme: theming.private-legacy-get-theme($theme-or-color-config);
          @include theming.private-check-duplicate-theme-styles($theme, 'mat-button');
          color: red;
        }
        ");
    }

    #[test]
    fn color_mixin_extraction() {
        let conforming = sheet(
            BUTTON_THEME,
            vec![mixin(
                "color($config-or-theme)",
                vec![decl("$config", "theming.get-color-config($config-or-theme)")],
            )],
        );
        assert!(report(&conforming).is_empty());

        let mut misnamed = sheet(
            BUTTON_THEME,
            vec![mixin(
                "color($config-or-theme)",
                vec![decl("$cfg", "theming.get-color-config($config-or-theme)")],
            )],
        );
        assert_eq!(
            report(&misnamed),
            ["For consistency, variable for configuration should be called: $config"]
        );
        let before = misnamed.clone();
        let result = fix(&mut misnamed);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.edits_applied, 0);
        assert_eq!(misnamed, before);
    }

    #[test]
    fn empty_density_mixin() {
        let sheet = sheet(BUTTON_THEME, vec![mixin("density($config-or-theme)", vec![])]);
        assert!(report(&sheet).is_empty());
    }

    #[test]
    fn non_theme_file_is_skipped() {
        let sheet = sheet(
            "foo.scss",
            vec![
                mixin("theme($x, $y)", vec![decl("color", "red")]),
                mixin("color($x)", vec![decl("color", "red")]),
            ],
        );
        assert!(report(&sheet).is_empty());
    }

    #[test]
    fn missing_file_path_is_skipped() {
        let sheet = StyleSheet::new(None, vec![mixin("color($x)", vec![decl("color", "red")])]);
        assert!(report(&sheet).is_empty());
    }
}

mod properties {
    use super::*;

    /// Every kind of repairable violation, nested and top-level
    fn repairable() -> StyleSheet {
        sheet(
            "src/material-experimental/mdc-slider/_slider-theme.scss",
            vec![
                AtRule::new("use", "'../core/theming/theming'").into(),
                mixin(
                    "color($theme)",
                    vec![QualifiedRule::new(".mat-mdc-slider", vec![decl("color", "red")]).into()],
                ),
                mixin(
                    "typography($config)",
                    vec![Comment::new("fonts").into(), decl("font-family", "$family")],
                ),
                mixin("density($density)", vec![decl("height", "$density-scale")]),
                mixin("theme($theme-or-color)", vec![]),
            ],
        )
    }

    #[test]
    fn private_mixins_are_ignored() {
        let sheet = sheet(
            BUTTON_THEME,
            vec![
                mixin("_theme($a, $b)", vec![decl("color", "red")]),
                mixin("private-color($x)", vec![decl("color", "red")]),
                mixin("_density()", vec![decl("height", "1px")]),
            ],
        );
        assert!(report(&sheet).is_empty());
    }

    #[test]
    fn unrelated_mixins_are_ignored() {
        let sheet = sheet(
            BUTTON_THEME,
            vec![
                mixin("base($config)", vec![decl("color", "red")]),
                mixin("color-variant($x)", vec![decl("color", "red")]),
                mixin("themes($x)", vec![]),
            ],
        );
        assert!(report(&sheet).is_empty());
    }

    #[test]
    fn report_after_fix_is_clean() {
        let mut sheet = repairable();
        assert_eq!(report(&sheet).len(), 9);

        let result = fix(&mut sheet);
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.edits_applied, 9);
        assert!(report(&sheet).is_empty());
    }

    #[test]
    fn duplicate_check_lands_after_commented_legacy_declaration() {
        let mut sheet = sheet(
            BUTTON_THEME,
            vec![mixin(
                "theme($theme-or-color-config)",
                vec![Comment::new("note").into(), decl("$theme", LEGACY)],
            )],
        );
        assert_eq!(report(&sheet).len(), 1);

        let result = fix(&mut sheet);
        assert_eq!(result.edits_applied, 1);
        assert!(report(&sheet).is_empty());
        insta::assert_snapshot!(sheet.to_scss(), @r"
        @mixin theme($theme-or-color-config) {
          /* note */
          $theme: theming.private-legacy-get-theme($theme-or-color-config);
          @include theming.private-check-duplicate-theme-styles($theme, 'mat-button');
        }
        ");
    }

    #[test]
    fn fix_is_idempotent() {
        let mut once = repairable();
        fix(&mut once);
        let mut twice = once.clone();
        let result = fix(&mut twice);
        assert_eq!(result.edits_applied, 0);
        assert_eq!(once, twice);

        insta::assert_snapshot!(twice.to_scss(), @r"
        @use '../core/theming/theming';
        @mixin color($config-or-theme) {
          $config: theming.get-color-config($config-or-theme);
          .mat-mdc-slider {
            color: red;
          }
        }
        @mixin typography($config-or-theme) {
          $config: typography.private-typography-to-2014-config(theming.get-typography-config($config-or-theme));
          /* fonts */
          font-family: $family;
        }
        @mixin density($config-or-theme) {
          $density-scale: theming.get-density-config($config-or-theme);
          height: $density-scale;
        }
        @mixin theme($theme-or-color-config) {
          $theme: theming.private-legacy-get-theme($theme-or-color-config);
          @include theming.private-check-duplicate-theme-styles($theme, 'mat-mdc-slider');
        }
        ");
    }

    #[test]
    fn diagnostics_follow_document_order() {
        let sheet = repairable();
        let nodes: Vec<String> = Linter::new()
            .check(&sheet)
            .diagnostics
            .iter()
            .map(|d| d.node.to_string())
            .collect();
        assert_eq!(nodes, ["1", "1", "2", "2", "3", "3", "4", "4", "4"]);
    }

    #[test]
    fn nested_mixins_are_fixed() {
        let mut sheet = sheet(
            BUTTON_THEME,
            vec![mixin(
                "theme($theme-or-color-config)",
                vec![
                    decl("$theme", LEGACY),
                    AtRule::block(
                        "include",
                        BUTTON_CHECK,
                        vec![mixin("color($c)", vec![decl("color", "red")])],
                    )
                    .into(),
                ],
            )],
        );
        let result = fix(&mut sheet);
        assert_eq!(result.edits_applied, 2);
        assert!(report(&sheet).is_empty());
    }
}

mod directives {
    use super::*;

    #[test]
    fn disable_next_line_suppresses_fixes_too() {
        let mut sheet = sheet(
            BUTTON_THEME,
            vec![
                Comment::new("gesso-disable-next-line material/theme-mixin-api").into(),
                mixin("color($legacy)", vec![decl("color", "red")]),
            ],
        );
        let before = sheet.clone();
        let result = fix(&mut sheet);
        assert_eq!(result.edits_applied, 0);
        assert_eq!(result.suppressed, 2);
        assert_eq!(sheet, before);
    }

    #[test]
    fn disable_file() {
        let sheet = sheet(
            BUTTON_THEME,
            vec![
                Comment::new("gesso-disable").into(),
                mixin("theme($x, $y)", vec![]),
            ],
        );
        assert!(report(&sheet).is_empty());
    }
}

mod harness {
    use super::*;

    const SCENARIO_A: &str = r#"{
        "type": "root",
        "source": {"input": {"file": "/repo/src/material/button/_button-theme.scss"}},
        "nodes": [{
            "type": "atrule",
            "name": "mixin",
            "params": "theme($theme-or-color-config)",
            "source": {"start": {"line": 3, "column": 1}},
            "nodes": [
                {"type": "decl", "prop": "$theme", "value": "theming.private-legacy-get-theme($theme-or-color-config)"},
                {
                    "type": "atrule",
                    "name": "include",
                    "params": "theming.private-check-duplicate-theme-styles($theme, 'mat-button')",
                    "nodes": [{"type": "decl", "prop": "color", "value": "red"}]
                }
            ]
        }]
    }"#;

    #[test]
    fn decoded_tree_conforms() {
        let sheet = StyleSheet::from_json(SCENARIO_A).unwrap();
        assert!(report(&sheet).is_empty());
    }

    #[test]
    fn diagnostics_serialize_with_location() {
        let json = SCENARIO_A.replace(
            r#""params": "theme($theme-or-color-config)""#,
            r#""params": "theme($config)""#,
        );
        let sheet = StyleSheet::from_json(&json).unwrap();
        let result = Linter::new().check(&sheet);
        assert_eq!(result.diagnostics.len(), 1);
        let value = serde_json::to_value(&result.diagnostics[0]).unwrap();
        assert_eq!(value["ruleName"], "material/theme-mixin-api");
        assert_eq!(value["line"], 3);
        assert_eq!(value["node"], serde_json::json!([0]));
    }

    #[test]
    fn json_tree_is_fixed_in_place() {
        let json = SCENARIO_A.replace(
            r#""params": "theme($theme-or-color-config)""#,
            r#""params": "theme($config)""#,
        );
        let linter = Linter::new().with_config(RunConfig::fix());
        let (result, fixed) = linter.lint_json(&json).unwrap();
        assert_eq!(result.filename, "/repo/src/material/button/_button-theme.scss");
        assert_eq!(result.edits_applied, 1);

        let fixed = StyleSheet::from_json(&fixed).unwrap();
        assert_eq!(fixed, StyleSheet::from_json(SCENARIO_A).unwrap());
    }

    #[test]
    fn config_from_rule_value() {
        let config = RunConfig::from_json_str(r#"{"enabled": true, "fix": true}"#).unwrap();
        let mut sheet = StyleSheet::from_json(SCENARIO_A).unwrap();
        let result = Linter::new().with_config(config).lint(&mut sheet).unwrap();
        assert_eq!(result.edits_applied, 0);
        assert!(!result.has_diagnostics());
    }
}
