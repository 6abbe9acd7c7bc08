//! Cryptographic Utilities
//!
//! OS randomness, SHA-256, and the encodings session tokens use.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// `N` bytes from the operating system RNG
pub fn random_array<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// `N` random bytes as URL-safe base64 without padding
///
/// The alphabet is cookie-safe, so the result needs no further quoting.
pub fn random_token<const N: usize>() -> String {
    URL_SAFE_NO_PAD.encode(random_array::<N>())
}

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Equality whose running time depends only on the length
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_matches_reference_digest() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_random_token_alphabet_and_length() {
        let token = random_token::<32>();
        assert_eq!(token.len(), 43);
        assert!(
            token
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        );
    }

    #[test]
    fn test_random_tokens_differ() {
        let tokens: std::collections::HashSet<_> = (0..64).map(|_| random_token::<16>()).collect();
        assert_eq!(tokens.len(), 64);
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"session", b"session"));
        assert!(!constant_time_eq(b"session", b"sessioN"));
        assert!(!constant_time_eq(b"session", b"sess"));
        assert!(constant_time_eq(b"", b""));
    }
}
