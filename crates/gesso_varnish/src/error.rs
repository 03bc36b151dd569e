//! Error types for gesso_varnish.
//!
//! Validation itself never fails: every convention violation becomes a
//! diagnostic. Errors only arise at the edges, when decoding configuration or
//! applying an edit to a tree that no longer matches it.

use gesso_relief::{NodePath, TreeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VarnishError {
    /// The run configuration was not a boolean or `{ enabled, fix }` object.
    #[error("invalid run configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The harness-supplied tree could not be decoded.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// The edit target does not resolve to an at-rule.
    #[error("edit target `{target}` does not resolve to an at-rule")]
    StaleEdit { target: NodePath },

    /// The parameter to substitute is absent from the target's parameters.
    #[error("parameter `{param}` not found in at-rule `{target}`")]
    ParamNotFound { target: NodePath, param: String },
}
