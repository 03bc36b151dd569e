//! Run configuration.
//!
//! Accepts the same shapes as a stylelint rule value:
//!
//! ```json
//! true
//! { "enabled": true, "fix": true }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::VarnishError;

/// Whether the linter runs, and whether it fixes or reports.
///
/// Fix and report modes are mutually exclusive for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRunConfig")]
pub struct RunConfig {
    pub enabled: bool,
    pub fix: bool,
}

impl RunConfig {
    /// Enabled, report mode
    pub const fn report() -> Self {
        Self {
            enabled: true,
            fix: false,
        }
    }

    /// Enabled, fix mode
    pub const fn fix() -> Self {
        Self {
            enabled: true,
            fix: true,
        }
    }

    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            fix: false,
        }
    }

    /// Decode from a JSON rule value
    pub fn from_json_str(json: &str) -> Result<Self, VarnishError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::report()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRunConfig {
    Enabled(bool),
    Options {
        #[serde(default = "default_enabled")]
        enabled: bool,
        #[serde(default)]
        fix: bool,
    },
}

fn default_enabled() -> bool {
    true
}

impl From<RawRunConfig> for RunConfig {
    fn from(raw: RawRunConfig) -> Self {
        match raw {
            RawRunConfig::Enabled(enabled) => Self {
                enabled,
                fix: false,
            },
            RawRunConfig::Options { enabled, fix } => Self { enabled, fix },
        }
    }
}
