//! Common error types for Tonearm

use thiserror::Error;

/// Common result type for Tonearm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Tonearm modules
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or mis-typed request parameter
    #[error("invalid method call")]
    InvalidMethodCall,

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error (wraps serde_json::Error)
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal collaborator error
    #[error("Internal error: {0}")]
    Internal(String),
}
