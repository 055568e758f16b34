//! Error types for grid options.

use thiserror::Error;

/// Result type alias using OptionsError.
pub type OptionsResult<T> = Result<T, OptionsError>;

/// Errors raised while loading grid options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
