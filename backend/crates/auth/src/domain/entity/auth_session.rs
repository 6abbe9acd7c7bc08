//! Auth Session Entity
//!
//! One authenticated browser context. Keyed in the store by the digest of
//! the cookie token.

use std::time::Duration;

use crate::domain::value_object::{session_token::SessionKey, user_name::UserName};

/// Auth session entity
///
/// `expires_at_ms` is fixed at creation: `created_at_ms + ttl`. Activity
/// never pushes it back.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Digest of the cookie token
    pub key: SessionKey,
    /// Owning teacher
    pub user_name: UserName,
    /// Creation instant (Unix ms)
    pub created_at_ms: i64,
    /// Expiry instant (Unix ms), exclusive
    pub expires_at_ms: i64,
}

impl AuthSession {
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(key: SessionKey, user_name: UserName, now_ms: i64, ttl: Duration) -> Self {
        Self {
            key,
            user_name,
            created_at_ms: now_ms,
            expires_at_ms: now_ms.saturating_add(ttl.as_millis() as i64),
        }
    }

    /// A session is dead from `expires_at_ms` onwards
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }
}
