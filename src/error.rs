//! Error types
//!
//! Every fallible concern gets its own error enum. Only the grade fetch
//! talks to the outside world; the others cover parsing and persistence.

use thiserror::Error;

/// Errors from loading a student's grades
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradesError {
    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for GradesError {
    fn from(err: serde_json::Error) -> Self {
        GradesError::Parse(err.to_string())
    }
}

/// Errors from date/time formatting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
}

/// Errors from a preference store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Storage is not available (private browsing, quota, no window)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write {key}: {error}")]
    Write { key: String, error: String },
}

/// Result type alias for grade operations
pub type GradesResult<T> = Result<T, GradesError>;
