//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

/// Failure reported by the remote review service.
///
/// Every port returns this type. It is `Clone` so a failed call can be
/// carried inside a reducer action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The request never produced a response (DNS, refused, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a status other than the one the operation expects.
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// The response body did not match the expected record shape.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The operation needs a credential and none is stored.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Reading or writing the stored credential failed.
    #[error("Credential storage error: {0}")]
    Credentials(String),

    /// The caller stopped waiting before the response arrived.
    #[error("Request cancelled before completion")]
    Cancelled,
}

impl RemoteError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        RemoteError::Network(message.into())
    }

    /// Creates an unexpected status error.
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        RemoteError::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        RemoteError::Decode(message.into())
    }
}
