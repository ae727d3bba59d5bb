//! Error types for feed client operations

use pachube_eeml::EemlError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised by the feed client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Building, validating or serializing the document failed
    #[error(transparent)]
    Eeml(#[from] EemlError),

    /// The request failed or the service answered with a non-2xx status
    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl ClientError {
    /// Create a transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// True for field-legality failures, including a malformed resource
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Eeml(e) if e.is_validation())
    }

    /// True for failed or rejected requests
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}
