//! Error types for EEML operations

use thiserror::Error;

/// Result type alias for EEML operations
pub type Result<T> = std::result::Result<T, EemlError>;

/// Errors that can occur while building or serializing an EEML document
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EemlError {
    /// A field violated its enumerated-value or range rule
    #[error("Invalid value for field '{field}': {message}")]
    Validation { field: String, message: String },

    /// The operation needs state the document does not have
    #[error("Invalid state: {message}")]
    State { message: String },

    /// Writing markup failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Reading markup failed
    #[error("Deserialization error: {message}")]
    Deserialization { message: String },
}

impl EemlError {
    /// Create a validation error for `field`
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a state error
    pub fn state<S: Into<String>>(message: S) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a deserialization error
    pub fn deserialization<S: Into<String>>(message: S) -> Self {
        Self::Deserialization {
            message: message.into(),
        }
    }

    /// True for field-legality failures
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The offending field, for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
