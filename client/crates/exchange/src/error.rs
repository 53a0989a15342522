//! Exchange Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::HttpError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Exchange-specific result type alias
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// Exchange-specific error variants
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Form-level validation failure (field message included)
    #[error("{0}")]
    Validation(String),

    /// The member's balance cannot cover the requested amount
    #[error("Insufficient balance: {needed} required")]
    InsufficientBalance { needed: Decimal },

    /// Operation requires a signed-in member
    #[error("Not signed in")]
    Unauthenticated,

    /// Operation requires the admin role
    #[error("Admin access required")]
    Forbidden,

    /// API transport failure
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// Response was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ExchangeError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExchangeError::Validation(_) => ErrorKind::UnprocessableEntity,
            ExchangeError::InsufficientBalance { .. } => ErrorKind::UnprocessableEntity,
            ExchangeError::Unauthenticated => ErrorKind::Unauthorized,
            ExchangeError::Forbidden => ErrorKind::Forbidden,
            ExchangeError::Transport(e) => match e.status() {
                Some(status) => ErrorKind::from_status(status),
                None => ErrorKind::ServiceUnavailable,
            },
            ExchangeError::Decode(_) => ErrorKind::InternalServerError,
        }
    }
}

impl From<ExchangeError> for AppError {
    fn from(err: ExchangeError) -> Self {
        let kind = err.kind();
        match &err {
            ExchangeError::InsufficientBalance { needed } => {
                AppError::new(kind, "Insufficient Balance").with_action(format!(
                    "You need {} to complete this purchase. Please earn more or make a deposit.",
                    needed
                ))
            }
            _ => AppError::new(kind, err.to_string()),
        }
    }
}
