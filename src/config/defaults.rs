//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How `clause check` reports violations
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human readable lines
    #[default]
    Text,
    /// A JSON array of violations
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Defaults applied when the command line leaves a value out
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Output format for `clause check`
    #[serde(default)]
    pub format: OutputFormat,
    /// Contract file used when `--contract` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<PathBuf>,
}
