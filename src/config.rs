use serde::Deserialize;
use thiserror::Error;

/// What to do with a top-level statement outside the supported subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedPolicy {
    /// Fail on the first unsupported statement.
    #[default]
    Reject,
    /// Log a warning and leave the statement out of the output.
    Skip,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranspilerConfig {
    pub unsupported: UnsupportedPolicy,
    /// Escape quotes, backslashes and control characters in string literals.
    pub escape_strings: bool,
}

#[derive(Debug, Error)]
#[error("Invalid transpiler config: {0}")]
pub struct ConfigError(#[from] serde_yaml::Error);

impl TranspilerConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }
}
