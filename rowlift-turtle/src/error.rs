//! Turtle writer error types

use thiserror::Error;

/// Errors from Turtle output operations
#[derive(Debug, Error)]
pub enum TurtleError {
    /// Filesystem error while writing a document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Turtle output operations
pub type Result<T> = std::result::Result<T, TurtleError>;
