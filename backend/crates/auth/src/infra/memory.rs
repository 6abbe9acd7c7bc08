//! In-Memory Session Store
//!
//! Process-local session map. A restart drops every session.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::session_token::SessionKey;
use crate::error::AuthResult;

/// Thread-safe in-memory session store
///
/// Locks are held only for the map operation itself, never across an
/// `.await`.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionKey, AuthSession>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for MemorySessionStore {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions.write().insert(session.key, session.clone());
        Ok(())
    }

    async fn find_live(&self, key: &SessionKey, now_ms: i64) -> AuthResult<Option<AuthSession>> {
        {
            let sessions = self.sessions.read();
            match sessions.get(key) {
                None => return Ok(None),
                Some(session) if !session.is_expired_at(now_ms) => {
                    return Ok(Some(session.clone()));
                }
                Some(_) => {}
            }
        }

        // Expired: re-check under the write lock, another request may have
        // removed it already.
        let mut sessions = self.sessions.write();
        if sessions
            .get(key)
            .is_some_and(|session| session.is_expired_at(now_ms))
        {
            sessions.remove(key);
            tracing::debug!(session = %key.log_id(), "Expired session evicted");
        }

        Ok(None)
    }

    async fn delete(&self, key: &SessionKey) -> AuthResult<()> {
        self.sessions.write().remove(key);
        Ok(())
    }

    async fn cleanup_expired(&self, now_ms: i64) -> AuthResult<u64> {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now_ms));
        Ok((before - sessions.len()) as u64)
    }

    async fn count(&self) -> AuthResult<usize> {
        Ok(self.sessions.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{session_token::SessionToken, user_name::UserName};
    use std::time::Duration;

    fn session(now_ms: i64) -> AuthSession {
        AuthSession::new(
            SessionToken::generate().key(),
            UserName::new("teacher1").unwrap(),
            now_ms,
            Duration::from_millis(1_000),
        )
    }

    #[tokio::test]
    async fn test_create_find_delete() {
        let store = MemorySessionStore::new();
        let session = session(0);

        store.create(&session).await.unwrap();
        let found = store.find_live(&session.key, 10).await.unwrap().unwrap();
        assert_eq!(found.user_name.as_str(), "teacher1");

        store.delete(&session.key).await.unwrap();
        assert!(store.find_live(&session.key, 10).await.unwrap().is_none());
        store.delete(&session.key).await.unwrap();
    }

    #[tokio::test]
    async fn test_find_live_evicts_expired() {
        let store = MemorySessionStore::new();
        let session = session(0);
        store.create(&session).await.unwrap();

        assert!(store.find_live(&session.key, 1_000).await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_cleanup_expired_counts() {
        let store = MemorySessionStore::new();
        store.create(&session(0)).await.unwrap();
        store.create(&session(0)).await.unwrap();
        let live = session(500);
        store.create(&live).await.unwrap();

        assert_eq!(store.cleanup_expired(1_000).await.unwrap(), 2);
        assert_eq!(store.count().await.unwrap(), 1);
        assert!(store.find_live(&live.key, 1_000).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        let session = session(0);

        store.create(&session).await.unwrap();
        assert!(other.find_live(&session.key, 1).await.unwrap().is_some());
    }
}
