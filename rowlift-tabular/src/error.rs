//! Error types for tabular operations.

use thiserror::Error;

/// Errors from row source operations.
#[derive(Debug, Error)]
pub enum TabularError {
    /// Schema or structural error (value count mismatch, duplicate column, etc.)
    #[error("Schema error: {0}")]
    Schema(String),

    /// CSV parse error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error while reading a source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tabular operations.
pub type Result<T> = std::result::Result<T, TabularError>;
