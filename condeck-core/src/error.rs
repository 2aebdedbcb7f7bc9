//! Error types for condeck.

use thiserror::Error;

/// Errors that can occur in condeck operations.
#[derive(Error, Debug)]
pub enum CondeckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Contest not found: {0}")]
    ContestNotFound(String),

    #[error("Invalid contest: {0}")]
    InvalidContest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for condeck operations.
pub type CondeckResult<T> = Result<T, CondeckError>;
