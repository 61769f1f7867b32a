//! Error types for projectboard
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in projectboard
#[derive(Debug, Error)]
pub enum BoardError {
    /// User input failed a form rule
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A store listener reported a failure
    #[error("Listener error: {0}")]
    Listener(String),

    /// A render target rejected an operation
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for projectboard operations
pub type Result<T> = std::result::Result<T, BoardError>;
