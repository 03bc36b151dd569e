//! Rules for the component library's Sass theming API.
//!
//! ## Rules
//!
//! - `material/theme-mixin-api` - Enforce a consistent API for theme mixins

mod theme_mixin_api;

pub use theme_mixin_api::{component_name_from_path, locate_mixins, LocatedMixin, MixinKind, ThemeMixinApi};
