//! Error Kind
//!
//! The HTTP-facing classification of every failure the service reports.

use std::fmt;

/// What went wrong, from the client's point of view
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
/// assert_eq!(ErrorKind::Unauthorized.title(), "Unauthorized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input rejected by a business rule or validation
    BadRequest,
    /// Bad credentials, or no live session
    Unauthorized,
    NotFound,
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Reason phrase, used as the problem `title`
    pub const fn title(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

    pub const fn is_server_error(self) -> bool {
        matches!(self, ErrorKind::InternalServerError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let expected = [
            (ErrorKind::BadRequest, 400),
            (ErrorKind::Unauthorized, 401),
            (ErrorKind::NotFound, 404),
            (ErrorKind::InternalServerError, 500),
        ];
        for (kind, status) in expected {
            assert_eq!(kind.status_code(), status, "{kind}");
        }
    }

    #[test]
    fn test_only_internal_is_server_error() {
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(!ErrorKind::Unauthorized.is_server_error());
        assert!(!ErrorKind::NotFound.is_server_error());
    }
}
