//! Built-in lint rules.
//!
//! - `material` - conventions of the component library's Sass theming API

pub mod material;
