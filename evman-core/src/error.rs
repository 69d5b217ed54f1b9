//! Error types for the evman ecosystem.

use thiserror::Error;

/// Errors that can occur in store and configuration operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
