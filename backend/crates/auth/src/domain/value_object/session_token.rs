//! Session Token Value Objects
//!
//! [`SessionToken`] is the secret handed to the browser in the cookie.
//! [`SessionKey`] is its SHA-256 digest, the only form the session store
//! ever holds.

use std::fmt;
use std::hash::{Hash, Hasher};

use platform::crypto::{constant_time_eq, random_token, sha256};

/// Random bytes per token (256 bits)
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Opaque session token as carried by the cookie
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh token from the OS RNG
    pub fn generate() -> Self {
        Self(random_token::<SESSION_TOKEN_BYTES>())
    }

    /// Wrap a token presented by a client (not checked for existence)
    pub fn from_cookie(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Store key for this token
    pub fn key(&self) -> SessionKey {
        SessionKey(sha256(self.0.as_bytes()))
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

/// SHA-256 of a session token
#[derive(Clone, Copy, Eq)]
pub struct SessionKey([u8; 32]);

impl SessionKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short non-reversible prefix for log correlation
    pub fn log_id(&self) -> String {
        self.0[..4].iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl PartialEq for SessionKey {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Hash for SessionKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionKey({}..)", self.log_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_distinct() {
        let a = SessionToken::generate();
        let b = SessionToken::generate();
        assert_ne!(a, b);
        assert_ne!(a.key(), b.key());
        assert_eq!(a.as_str().len(), 43);
    }

    #[test]
    fn test_key_is_stable_for_same_token() {
        let token = SessionToken::generate();
        let presented = SessionToken::from_cookie(token.as_str());
        assert_eq!(token.key(), presented.key());
    }

    #[test]
    fn test_debug_hides_token() {
        let token = SessionToken::generate();
        assert!(!format!("{:?}", token).contains(token.as_str()));
        assert_eq!(token.key().log_id().len(), 8);
    }
}
