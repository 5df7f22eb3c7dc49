//! Common types and errors for DocDeck
//!
//! This crate provides the error type and helpers shared by every DocDeck component.

pub mod telemetry;

use thiserror::Error;

/// Core error types for DocDeck operations
#[derive(Error, Debug)]
pub enum DocError {
    #[error("Doc with id {doc_id} not found")]
    NotFound { doc_id: String },

    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DocError {
    /// Shorthand for a missing document
    pub fn not_found(doc_id: impl Into<String>) -> Self {
        DocError::NotFound {
            doc_id: doc_id.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DocError>;

/// Process exit codes for the `doc_mcp` binary
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 101;
