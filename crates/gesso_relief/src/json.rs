//! Decoding and encoding of postcss-shaped JSON trees.
//!
//! Harnesses parse SCSS with postcss and hand the linter `root.toJSON()`.
//! Fields the tree model does not use (`raws`, `inputs`, ...) are ignored.

use serde::{Deserialize, Serialize};

use crate::ast::{StyleNode, StyleSheet};
use crate::error::TreeError;

#[derive(Deserialize)]
struct RawRoot {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    nodes: Vec<StyleNode>,
    #[serde(default)]
    source: Option<RawSource>,
}

#[derive(Deserialize, Serialize)]
struct RawSource {
    #[serde(default)]
    input: Option<RawInput>,
}

#[derive(Deserialize, Serialize)]
struct RawInput {
    #[serde(default)]
    file: Option<String>,
}

#[derive(Serialize)]
struct RawRootRef<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    nodes: &'a [StyleNode],
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<RawSource>,
}

impl StyleSheet {
    /// Decode a tree from postcss JSON.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let raw: RawRoot = serde_json::from_str(json)?;
        if raw.kind != "root" {
            return Err(TreeError::NotRoot(raw.kind));
        }
        let file = raw.source.and_then(|s| s.input).and_then(|i| i.file);
        Ok(Self {
            file,
            nodes: raw.nodes,
        })
    }

    /// Encode the tree in the same shape [`StyleSheet::from_json`] accepts.
    pub fn to_json(&self) -> Result<String, TreeError> {
        let raw = RawRootRef {
            kind: "root",
            nodes: &self.nodes,
            source: self.file.as_ref().map(|file| RawSource {
                input: Some(RawInput {
                    file: Some(file.clone()),
                }),
            }),
        };
        Ok(serde_json::to_string(&raw)?)
    }
}
