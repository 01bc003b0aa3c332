//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Display output is the bare message: the HTTP layer serializes it verbatim
/// into the `{"error": ...}` response body, so no variant prefixes its text.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing input, detected before any store call.
    #[error("{0}")]
    Validation(String),

    /// The referenced record key is absent.
    #[error("{0}")]
    NotFound(String),

    /// A freshly generated key was already in use.
    #[error("{0}")]
    Conflict(String),

    /// Unclassified failure from the record store, message passed through.
    #[error("{0}")]
    Store(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
