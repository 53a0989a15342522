//! Click Workflow Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::HttpError;
use thiserror::Error;

/// Click-specific result type alias
pub type ClickResult<T> = Result<T, ClickError>;

/// Click-specific error variants
#[derive(Debug, Error)]
pub enum ClickError {
    /// The browser refused to open the auxiliary window
    #[error("Popup Blocked")]
    PopupBlocked,

    /// A task is already running; finish or abandon it first
    #[error("Complete your current task first")]
    TaskAlreadyActive,

    /// The operation needs an active task
    #[error("No click task is active")]
    NoActiveTask,

    /// Confirmation attempted before the engagement timer finished
    #[error("Task is not verified yet")]
    TaskNotVerified,

    /// The verification submission failed; the task is preserved
    #[error("Verification Failed")]
    SubmitFailed(#[source] Box<ClickError>),

    /// API transport failure
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// Response was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClickError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClickError::PopupBlocked => ErrorKind::BadRequest,
            ClickError::TaskAlreadyActive => ErrorKind::Conflict,
            ClickError::NoActiveTask | ClickError::TaskNotVerified => ErrorKind::Conflict,
            ClickError::SubmitFailed(_) => ErrorKind::ServiceUnavailable,
            ClickError::Transport(e) => match e.status() {
                Some(status) => ErrorKind::from_status(status),
                None => ErrorKind::ServiceUnavailable,
            },
            ClickError::Decode(_) => ErrorKind::InternalServerError,
        }
    }
}

impl From<ClickError> for AppError {
    fn from(err: ClickError) -> Self {
        let kind = err.kind();
        match &err {
            ClickError::PopupBlocked => AppError::new(kind, "Popup Blocked")
                .with_action("Please allow popups for this site to engage with offers."),
            ClickError::SubmitFailed(_) => AppError::new(kind, "Verification Failed")
                .with_action("Unable to verify your click. Please try again."),
            _ => AppError::new(kind, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_blocked_carries_notice() {
        let app: AppError = ClickError::PopupBlocked.into();
        assert_eq!(app.message(), "Popup Blocked");
        assert!(app.action().unwrap().contains("allow popups"));
    }

    #[test]
    fn test_submit_failed_preserves_cause() {
        use std::error::Error;

        let cause = ClickError::Transport(HttpError::Status {
            status: 503,
            body: "maintenance".to_string(),
        });
        let err = ClickError::SubmitFailed(Box::new(cause));
        assert!(err.source().is_some());

        let app: AppError = err.into();
        assert!(app.action().unwrap().contains("try again"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ClickError::TaskAlreadyActive.kind(), ErrorKind::Conflict);
        assert_eq!(ClickError::TaskNotVerified.kind(), ErrorKind::Conflict);
        assert_eq!(ClickError::PopupBlocked.kind(), ErrorKind::BadRequest);
    }
}
