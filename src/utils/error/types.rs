//! Error type definitions

use thiserror::Error;

/// Result type alias for taskflow
pub type Result<T> = std::result::Result<T, TaskflowError>;

/// Main error type for taskflow
#[derive(Error, Debug)]
pub enum TaskflowError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource missing or not visible to the caller
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is known but lacks the permission for this action
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
