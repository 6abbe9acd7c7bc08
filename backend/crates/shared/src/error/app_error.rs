//! Application Error
//!
//! [`AppError`] is what a handler ultimately fails with. It carries only
//! client-safe text; internal details are logged by the crate that produced
//! them before conversion.

use std::borrow::Cow;
use std::fmt;

use super::kind::ErrorKind;
use super::problem::ProblemDetails;

/// Client-facing error
///
/// ```rust
/// use kernel::error::app_error::AppError;
/// use kernel::error::kind::ErrorKind;
///
/// let err = AppError::new(ErrorKind::Unauthorized, "Authentication required")
///     .with_action("Log in as a teacher to continue");
/// assert_eq!(err.status_code(), 401);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
}

/// `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
        }
    }

    /// 500 with a fixed message
    pub fn internal() -> Self {
        Self::new(ErrorKind::InternalServerError, "Internal server error")
    }

    /// Next step the user can take
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Problem document sent to the client
    pub fn to_problem(&self) -> ProblemDetails {
        ProblemDetails {
            type_uri: format!("https://httpstatuses.io/{}", self.status_code()),
            title: self.kind.title().to_string(),
            status: self.status_code(),
            detail: self.message.to_string(),
            action: self.action.as_deref().map(str::to_string),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {action})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}
