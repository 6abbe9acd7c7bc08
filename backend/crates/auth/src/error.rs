//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Header set on every rejection caused by a missing or dead session
pub const AUTH_REQUIRED_HEADER: &str = "x-auth-required";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user name or wrong password. The two are never told apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No session, or the session is unknown, revoked or expired
    #[error("Authentication required")]
    Unauthenticated,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Internal details stay in the log, the client gets a generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::InvalidCredentials => AppError::new(self.kind(), "Invalid credentials"),
            AuthError::Unauthenticated => AppError::new(self.kind(), "Authentication required")
                .with_action("Log in as a teacher to continue"),
            AuthError::Internal(_) => AppError::internal(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unauthenticated => {
                tracing::debug!("Rejected request without a valid session");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let mut response = self.to_app_error().into_response();

        if matches!(self, AuthError::Unauthenticated) {
            response.headers_mut().insert(
                HeaderName::from_static(AUTH_REQUIRED_HEADER),
                HeaderValue::from_static("true"),
            );
        }

        response
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("blocking task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_not_exposed() {
        let app_error = AuthError::Internal("lock poisoned at store.rs".into()).to_app_error();
        assert!(!app_error.message().contains("store.rs"));
    }

    #[test]
    fn test_auth_required_header_only_on_unauthenticated() {
        let response = AuthError::Unauthenticated.into_response();
        assert_eq!(response.headers()[AUTH_REQUIRED_HEADER], "true");

        let response = AuthError::InvalidCredentials.into_response();
        assert!(response.headers().get(AUTH_REQUIRED_HEADER).is_none());
    }
}
