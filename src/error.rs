//! Error types for docbind library.

use std::io;
use thiserror::Error;

/// Result type alias for docbind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building variables or cleaning documents.
#[derive(Error, Debug)]
pub enum Error {
    /// A table row does not have the row count established by the first row.
    #[error("Incorrect number of rows. Expected {expected} but was {actual}")]
    IncorrectNumberOfRows {
        /// Row count fixed by the first non-empty row
        expected: usize,
        /// Length of the rejected row
        actual: usize,
    },

    /// A table row mixes variable kinds.
    #[error("Expected type of variable: {expected}, but actual is: {actual}")]
    VariableTypeMismatch {
        /// Kind of the row's first variable
        expected: String,
        /// Kind of the offending variable
        actual: String,
    },

    /// A table row mixes variables with different keys.
    #[error("Expected name of variable: {expected}, but actual is: {actual}")]
    VariableKeyMismatch {
        /// Key name of the row's first variable
        expected: String,
        /// Key name of the offending variable
        actual: String,
    },

    /// The placeholder delimiters are empty or do not compile.
    #[error("Invalid variable pattern: {0}")]
    InvalidPattern(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
