//! Activity Error Types
//!
//! Activity-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::participant_email::ParticipantEmailError;

/// Activity-specific result type alias
pub type ActivityResult<T> = Result<T, ActivityError>;

/// Activity-specific error variants
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error(transparent)]
    InvalidEmail(#[from] ParticipantEmailError),
}

impl ActivityError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::NotFound => ErrorKind::NotFound,
            ActivityError::AlreadySignedUp
            | ActivityError::NotSignedUp
            | ActivityError::InvalidEmail(_) => ErrorKind::BadRequest,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let error = AppError::new(self.kind(), self.to_string());
        match self {
            ActivityError::InvalidEmail(_) => {
                error.with_action("Provide the student's e-mail address, e.g. name@school.edu")
            }
            _ => error,
        }
    }
}

impl From<ActivityError> for AppError {
    fn from(err: ActivityError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Activity request rejected");
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ActivityError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ActivityError::AlreadySignedUp.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ActivityError::NotSignedUp.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ActivityError::InvalidEmail(ParticipantEmailError::Empty)
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ActivityError::NotFound.to_app_error().message(),
            "Activity not found"
        );
        assert_eq!(
            ActivityError::NotSignedUp.to_app_error().message(),
            "Student is not signed up for this activity"
        );
    }
}
