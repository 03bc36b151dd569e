//! Error types for tree decoding.

use thiserror::Error;

/// Errors raised while decoding a harness-supplied tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The input was not valid JSON or did not have the node shape.
    #[error("invalid style sheet JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level node was something other than a `root`.
    #[error("expected a `root` node at the top level, found `{0}`")]
    NotRoot(String),
}
