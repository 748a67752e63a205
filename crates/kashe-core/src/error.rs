//! Error types for the core crate.

use thiserror::Error;

/// Errors raised while loading or validating site configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// A value is out of its allowed range.
    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
