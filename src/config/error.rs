//! Configuration error types.

use thiserror::Error;

/// Provider config loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse config: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("unsupported config file extension {0:?} (expected yaml, yml or json)")]
    UnsupportedFormat(String),
    #[error("validation failed: {0}")]
    Validation(String),
}
