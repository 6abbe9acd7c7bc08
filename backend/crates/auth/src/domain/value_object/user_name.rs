//! User Name Value Object
//!
//! A teacher's login handle. It is the key of the credential store and the
//! identity attached to every session.
//!
//! ## Invariants
//! - 1 to 64 characters
//! - No whitespace or control characters
//! - Compared byte-for-byte: `Teacher1` and `teacher1` are different accounts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserNameError {
    #[error("User name cannot be empty")]
    Empty,

    #[error("User name must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("User name cannot contain whitespace or control characters")]
    InvalidCharacter,
}

/// Validated, case-sensitive user name
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl Into<String>) -> Result<Self, UserNameError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = raw.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: USER_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserName({})", self.0)
    }
}
