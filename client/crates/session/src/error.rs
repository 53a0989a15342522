//! Session Error Types
//!
//! Session-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::HttpError;
use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-specific error variants
#[derive(Debug, Error)]
pub enum SessionError {
    /// Login rejected (wrong username/password)
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// An operation required a signed-in member
    #[error("Not signed in")]
    Unauthenticated,

    /// Form-level validation failure (field message included)
    #[error("{0}")]
    Validation(String),

    /// Persisted credential could not be read or written
    #[error("Credential storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Stored or received data was not the expected JSON shape
    #[error("Malformed data: {0}")]
    Decode(#[from] serde_json::Error),

    /// API transport failure
    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl SessionError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::InvalidCredentials | SessionError::Unauthenticated => {
                ErrorKind::Unauthorized
            }
            SessionError::Validation(_) => ErrorKind::UnprocessableEntity,
            SessionError::Storage(_) | SessionError::Decode(_) => {
                ErrorKind::InternalServerError
            }
            SessionError::Transport(e) => match e.status() {
                Some(status) => ErrorKind::from_status(status),
                None => ErrorKind::ServiceUnavailable,
            },
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            SessionError::Storage(e) => {
                tracing::error!(error = %e, "Credential storage error");
            }
            SessionError::Decode(e) => {
                tracing::error!(error = %e, "Malformed session data");
            }
            SessionError::Transport(e) => {
                tracing::warn!(error = %e, "Auth transport error");
            }
            _ => {
                tracing::debug!(error = %self, "Session error");
            }
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}
