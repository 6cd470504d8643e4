//! Error types for YAML configuration loading.

use thiserror::Error;

/// Error type for grid manifest loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing or serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// A value that parsed but cannot describe a layout
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field path
        field: String,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
