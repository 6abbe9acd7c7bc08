//! Participant E-mail Value Object
//!
//! Only the shape is checked: one `@` with something on each side, no
//! whitespace. Comparison is exact, as participants were always stored.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// RFC 5321 path limit
pub const MAX_EMAIL_LENGTH: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticipantEmailError {
    #[error("E-mail address is required")]
    Empty,

    #[error("E-mail address must be at most {max} characters")]
    TooLong { max: usize },

    #[error("'{0}' is not an e-mail address")]
    Malformed(String),
}

/// E-mail address identifying a participant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    pub fn new(raw: impl Into<String>) -> Result<Self, ParticipantEmailError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(ParticipantEmailError::Empty);
        }
        if raw.chars().count() > MAX_EMAIL_LENGTH {
            return Err(ParticipantEmailError::TooLong {
                max: MAX_EMAIL_LENGTH,
            });
        }

        let well_formed = !raw.chars().any(|c| c.is_whitespace() || c.is_control())
            && matches!(
                raw.split_once('@'),
                Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            );
        if !well_formed {
            return Err(ParticipantEmailError::Malformed(raw));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
