//! # gesso_relief
//!
//! Relief - The style sheet tree surface for Gesso.
//!
//! ## Name Origin
//!
//! **Relief** is the sculptural technique where forms stand out from a flat
//! background. `gesso_relief` gives a flat style sheet its raised shape: the
//! ordered tree of at-rules, rules, declarations and comments that the linter
//! inspects and, in fix mode, reshapes in place.
//!
//! The tree is produced by an external parser. This crate only models it,
//! decodes the postcss-shaped JSON a harness hands over, and prints it back
//! to SCSS text.
//!
//! ```
//! use gesso_relief::ast::{AtRule, Declaration, StyleSheet};
//!
//! let sheet = StyleSheet::new(
//!     Some("src/material/button/_button-theme.scss"),
//!     vec![AtRule::block("mixin", "color($config-or-theme)", vec![
//!         Declaration::new("$config", "theming.get-color-config($config-or-theme)").into(),
//!     ])
//!     .into()],
//! );
//! assert_eq!(
//!     sheet.to_scss(),
//!     "@mixin color($config-or-theme) {\n  $config: theming.get-color-config($config-or-theme);\n}\n",
//! );
//! ```

pub mod ast;
mod error;
mod json;
mod path;
mod printer;

pub use error::TreeError;
pub use path::NodePath;
