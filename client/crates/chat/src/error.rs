//! Chat Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::HttpError;
use thiserror::Error;

/// Chat-specific result type alias
pub type ChatResult<T> = Result<T, ChatError>;

/// Chat-specific error variants
#[derive(Debug, Error)]
pub enum ChatError {
    /// The real-time connection is not open; sending is disabled
    #[error("Connection Issue")]
    ConnectionLost,

    /// Empty messages are not sent
    #[error("Message is empty")]
    EmptyMessage,

    /// Channel names are lowercase words and dashes
    #[error("Invalid channel name: {0}")]
    InvalidChannel(String),

    /// API transport failure (history fetch)
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// Response was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ChatError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::ConnectionLost => ErrorKind::ServiceUnavailable,
            ChatError::EmptyMessage | ChatError::InvalidChannel(_) => {
                ErrorKind::UnprocessableEntity
            }
            ChatError::Transport(e) => match e.status() {
                Some(status) => ErrorKind::from_status(status),
                None => ErrorKind::ServiceUnavailable,
            },
            ChatError::Decode(_) => ErrorKind::InternalServerError,
        }
    }
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        let kind = err.kind();
        match &err {
            ChatError::ConnectionLost => AppError::new(kind, "Connection Issue")
                .with_action("Failed to send message. Please try again."),
            _ => AppError::new(kind, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_lost_notice() {
        let app: AppError = ChatError::ConnectionLost.into();
        assert_eq!(app.message(), "Connection Issue");
        assert!(app.action().unwrap().contains("try again"));
        assert_eq!(app.status_code(), 503);
    }

    #[test]
    fn test_validation_kinds() {
        assert_eq!(ChatError::EmptyMessage.kind(), ErrorKind::UnprocessableEntity);
        assert_eq!(
            ChatError::InvalidChannel("General!".into()).kind(),
            ErrorKind::UnprocessableEntity
        );
    }
}
