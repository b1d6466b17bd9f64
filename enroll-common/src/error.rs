//! Common error types for the enrollment tools

use thiserror::Error;

/// Common result type for enrollment operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the enrollment tools
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pending-queue header lacks an expected column
    #[error("Pending queue header is missing column '{0}'")]
    MissingColumn(String),

    /// A pending-queue data row could not be parsed
    #[error("Malformed pending queue row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
}
