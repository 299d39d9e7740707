//! Error types for mapkit

use crate::key::Key;
use thiserror::Error;

/// Broad category of a [`MapError`].
///
/// Validation helpers take an `ErrorKind` to decide which error they raise, so
/// the same structural check can surface as a caller mistake or as an
/// unexpected computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied value violates a structural precondition.
    InvalidArgument,
    /// A computed value violates a type expectation.
    UnexpectedValue,
    /// A duplicate key or field was found and the caller asked for an error.
    Conflict,
}

impl ErrorKind {
    /// Build an error of this kind carrying `message`.
    ///
    /// `Conflict` has no free-form variant; it maps to [`MapError::Conflict`].
    pub fn into_error(self, message: impl Into<String>) -> MapError {
        let message = message.into();
        match self {
            ErrorKind::InvalidArgument => MapError::InvalidArgument(message),
            ErrorKind::UnexpectedValue => MapError::UnexpectedValue(message),
            ErrorKind::Conflict => MapError::Conflict(message),
        }
    }
}

/// mapkit error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// A caller-supplied value violates a structural precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A computed value has the wrong type.
    #[error("Unexpected value: {0}")]
    UnexpectedValue(String),
    /// Two entries of an extraction resolved to the same key.
    #[error("Duplicate entry for '{key}' found")]
    DuplicateKey {
        /// The key that occurred more than once
        key: Key,
    },
    /// An embedded field already exists in the destination entry.
    #[error("Field '{field}' already exists in destination entry '{key}'")]
    FieldExists {
        /// Name of the field being embedded
        field: Key,
        /// Destination entry holding the field
        key: Key,
    },
    /// Generic conflict raised through [`ErrorKind::Conflict`].
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl MapError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MapError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            MapError::UnexpectedValue(_) => ErrorKind::UnexpectedValue,
            MapError::DuplicateKey { .. } | MapError::FieldExists { .. } | MapError::Conflict(_) => {
                ErrorKind::Conflict
            }
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MapError>;
