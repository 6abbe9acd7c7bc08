//! Password Hashing and Verification
//!
//! bcrypt-based credential handling:
//! - Salted, deliberately slow hashing (cost 12 by default)
//! - Verification through bcrypt's own routine, which reads salt and cost
//!   from the stored hash
//! - Zeroization of clear-text passwords
//! - Redacted `Debug` output for both clear and hashed forms
//!
//! Hashing and verification are CPU-bound for tens of milliseconds at cost
//! 12. Async callers run them on a blocking thread.

use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, NO_PAD};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::random_token;

// ============================================================================
// Constants
// ============================================================================

/// bcrypt cost used for stored credentials
pub const DEFAULT_COST: u32 = 12;

/// Lowest cost bcrypt accepts (tests only)
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Minimum length accepted when provisioning a new password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// bcrypt only reads the first 72 bytes of input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// bcrypt's own base64 flavour (`./A-Za-z0-9`, no padding)
const BCRYPT_BASE64: GeneralPurpose = GeneralPurpose::new(&alphabet::BCRYPT, NO_PAD);

/// Encoded salt length inside the 53-character hash body
const SALT_CHARS: usize = 22;
const SALT_BYTES: usize = 16;
const DIGEST_BYTES: usize = 23;

// ============================================================================
// Error Types
// ============================================================================

/// Provisioning-time password policy violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} bytes (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,

    #[error("Unsupported bcrypt cost {0}")]
    InvalidCost(u32),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password, erased from memory on drop
///
/// Not `Clone`, and `Debug` never prints the value.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a submitted password as-is
    ///
    /// Login input is never policy-checked: a stored credential may predate
    /// the current policy, and a rejection here would differ observably from
    /// a failed verification.
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Wrap a password that is about to be hashed for storage
    pub fn for_provisioning(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = raw.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if raw.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_BYTES,
                actual: raw.len(),
            });
        }

        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with a fresh random salt at the given cost
    pub fn hash(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordHashError::InvalidCost(cost));
        }

        let hash = bcrypt::hash(self.as_bytes(), cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword { hash, cost })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt hash in modular crypt format (`$2b$12$<salt><hash>`)
///
/// The string embeds algorithm version, cost and salt, so verification
/// needs nothing besides it.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
    cost: u32,
}

impl HashedPassword {
    /// Parse a stored hash, rejecting anything bcrypt could not verify against
    ///
    /// Beyond the `$2x$NN$` layout this checks the cost range and that salt
    /// and digest decode as bcrypt base64 to 16 and 23 bytes.
    pub fn from_hash_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        let cost = hash
            .parse::<bcrypt::HashParts>()
            .map_err(|_| PasswordHashError::InvalidHashFormat)?
            .get_cost();
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordHashError::InvalidCost(cost));
        }

        let body = hash
            .rsplit('$')
            .next()
            .ok_or(PasswordHashError::InvalidHashFormat)?;
        let (salt, digest) = body
            .split_at_checked(SALT_CHARS)
            .ok_or(PasswordHashError::InvalidHashFormat)?;
        let decodes_to = |part: &str, len: usize| {
            BCRYPT_BASE64
                .decode(part)
                .is_ok_and(|bytes| bytes.len() == len)
        };
        if !decodes_to(salt, SALT_BYTES) || !decodes_to(digest, DIGEST_BYTES) {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash, cost })
    }

    /// Hash of random bytes nobody knows, at the given cost
    ///
    /// Verifying against it takes as long as a real verification at the
    /// same cost and always fails.
    pub fn decoy(cost: u32) -> Result<Self, PasswordHashError> {
        let secret = ClearTextPassword::new(random_token::<32>());
        secret.hash(cost)
    }

    pub fn as_hash_string(&self) -> &str {
        &self.hash
    }

    /// Cost factor embedded in the hash
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Verify a password against this hash
    ///
    /// bcrypt recomputes the hash with the embedded salt and cost and
    /// compares the result itself.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        bcrypt::verify(password.as_bytes(), &self.hash).unwrap_or(false)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("password123".to_string());
        let hashed = password.hash(MIN_COST).unwrap();

        assert!(hashed.verify(&password));

        let wrong = ClearTextPassword::new("password124".to_string());
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_hash_is_salted() {
        let password = ClearTextPassword::new("same-input".to_string());
        let a = password.hash(MIN_COST).unwrap();
        let b = password.hash(MIN_COST).unwrap();

        assert_ne!(a.as_hash_string(), b.as_hash_string());
        assert!(a.verify(&password));
        assert!(b.verify(&password));
    }

    #[test]
    fn test_hash_string_roundtrip_keeps_cost() {
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let hashed = password.hash(MIN_COST).unwrap();

        let restored = HashedPassword::from_hash_string(hashed.as_hash_string()).unwrap();
        assert_eq!(restored.cost(), MIN_COST);
        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_hash_string() {
        assert!(HashedPassword::from_hash_string("not_a_valid_hash").is_err());
        assert!(HashedPassword::from_hash_string("").is_err());
    }

    fn valid_body() -> String {
        let hashed = ClearTextPassword::new("password123".to_string())
            .hash(MIN_COST)
            .unwrap();
        hashed.as_hash_string()[7..].to_string()
    }

    #[test]
    fn test_stored_cost_out_of_range() {
        let body = valid_body();
        assert!(matches!(
            HashedPassword::from_hash_string(format!("$2b$99${body}")),
            Err(PasswordHashError::InvalidCost(99))
        ));
        assert!(matches!(
            HashedPassword::from_hash_string(format!("$2b$03${body}")),
            Err(PasswordHashError::InvalidCost(3))
        ));
    }

    #[test]
    fn test_body_outside_bcrypt_alphabet() {
        let hash = format!("$2b$12${}", "!".repeat(53));
        assert!(matches!(
            HashedPassword::from_hash_string(hash),
            Err(PasswordHashError::InvalidHashFormat)
        ));

        let hash = format!("$2b$12${}", "+".repeat(53));
        assert!(matches!(
            HashedPassword::from_hash_string(hash),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_salt_with_stray_trailing_bits() {
        // last salt character may only carry 2 significant bits
        let mut body = valid_body();
        body.replace_range(21..22, "/");
        assert!(matches!(
            HashedPassword::from_hash_string(format!("$2b$04${body}")),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_parsed_hash_always_verifies_cleanly() {
        let hashed = ClearTextPassword::new("password123".to_string())
            .hash(MIN_COST)
            .unwrap();
        let restored = HashedPassword::from_hash_string(hashed.as_hash_string()).unwrap();
        assert!(bcrypt::verify("password123", restored.as_hash_string()).is_ok());
        assert!(bcrypt::verify("other", restored.as_hash_string()).is_ok());
    }

    #[test]
    fn test_invalid_cost() {
        let password = ClearTextPassword::new("whatever".to_string());
        assert!(matches!(
            password.hash(3),
            Err(PasswordHashError::InvalidCost(3))
        ));
    }

    #[test]
    fn test_decoy_never_verifies() {
        let decoy = HashedPassword::decoy(MIN_COST).unwrap();
        assert!(!decoy.verify(&ClearTextPassword::new(String::new())));
        assert!(!decoy.verify(&ClearTextPassword::new("password123".to_string())));
    }

    #[test]
    fn test_provisioning_policy() {
        assert_eq!(
            ClearTextPassword::for_provisioning("   ".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
        assert!(matches!(
            ClearTextPassword::for_provisioning("short".to_string()),
            Err(PasswordPolicyError::TooShort { .. })
        ));
        assert!(matches!(
            ClearTextPassword::for_provisioning("a".repeat(MAX_PASSWORD_BYTES + 1)),
            Err(PasswordPolicyError::TooLong { .. })
        ));
        assert!(ClearTextPassword::for_provisioning("correct horse".to_string()).is_ok());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash(MIN_COST).unwrap();
        let debug_output = format!("{:?}", hashed);
        assert!(!debug_output.contains(hashed.as_hash_string()));
    }
}
