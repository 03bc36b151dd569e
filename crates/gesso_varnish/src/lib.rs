//! # gesso_varnish
//!
//! Varnish - The theme mixin API checker for Gesso.
//!
//! ## Name Origin
//!
//! **Varnish** is the final coat that evens out a painted surface and shows
//! every flaw beneath it. `gesso_varnish` inspects the Sass theme mixins of a
//! component library, reports where they drift from the shared API
//! convention and, in fix mode, touches them up in place.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gesso_relief::ast::StyleSheet;
//! use gesso_varnish::{Linter, RunConfig};
//!
//! let linter = Linter::new().with_config(RunConfig::from_json_str(r#"{"fix": true}"#)?);
//! let (result, fixed_json) = linter.lint_json(&postcss_json)?;
//! for diagnostic in &result.diagnostics {
//!     eprintln!("{}: {} ({})", result.filename, diagnostic.message, diagnostic.rule_name);
//! }
//! let fixed = StyleSheet::from_json(&fixed_json)?;
//! std::fs::write(&result.filename, fixed.to_scss())?;
//! ```
//!
//! ## Rules
//!
//! - `material/theme-mixin-api` - Enforce a consistent API for theme mixins
//!
//! ## Inline Disable Comments
//!
//! ```scss
//! /* gesso-disable material/theme-mixin-api */
//!
//! // gesso-disable-next-line material/theme-mixin-api
//! @mixin theme($theme) { ... }
//! ```

mod config;
mod context;
mod diagnostic;
mod disable;
mod error;
mod fix;
mod linter;
mod rule;
pub mod rules;

pub use config::RunConfig;
pub use context::LintContext;
pub use diagnostic::{Label, LintDiagnostic, LintSummary, Severity};
pub use disable::DisabledRules;
pub use error::VarnishError;
pub use fix::{apply_edits, EditOp, Finding, TreeEdit};
pub use linter::{LintResult, Linter};
pub use rule::{Rule, RuleMeta, RuleRegistry};

use gesso_relief::ast::StyleSheet;

/// Lint a tree in report mode with the built-in rules
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::new()` directly.
pub fn lint(sheet: &StyleSheet) -> LintResult {
    Linter::new().check(sheet)
}
