//! Session Manager
//!
//! Sole owner of session lifetimes: issues tokens, resolves them back to a
//! teacher, revokes them, and evicts expired entries.
//!
//! Expiry is fixed at `created + ttl`. Validation never extends it.

use std::sync::Arc;
use std::time::Duration;

use platform::clock::{Clock, SystemClock};
use tokio::task::JoinHandle;

use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{session_token::SessionToken, user_name::UserName};
use crate::error::AuthResult;

pub struct SessionManager<S>
where
    S: SessionRepository,
{
    repo: Arc<S>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl<S> Clone for SessionManager<S>
where
    S: SessionRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            clock: self.clock.clone(),
            ttl: self.ttl,
        }
    }
}

impl<S> SessionManager<S>
where
    S: SessionRepository,
{
    pub fn new(repo: Arc<S>, ttl: Duration) -> Self {
        Self::with_clock(repo, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(repo: Arc<S>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock, ttl }
    }

    /// Issue a new session for `user_name` and return its token
    pub async fn create(&self, user_name: &UserName) -> AuthResult<SessionToken> {
        let token = SessionToken::generate();
        let session = AuthSession::new(
            token.key(),
            user_name.clone(),
            self.clock.now_ms(),
            self.ttl,
        );

        self.repo.create(&session).await?;

        tracing::debug!(
            session = %session.key.log_id(),
            user_name = %user_name,
            expires_at_ms = session.expires_at_ms,
            "Session created"
        );

        Ok(token)
    }

    /// Resolve a token to its live session
    pub async fn lookup(&self, token: &SessionToken) -> AuthResult<Option<AuthSession>> {
        self.repo.find_live(&token.key(), self.clock.now_ms()).await
    }

    /// Resolve a token to the owning teacher; `None` means invalid
    pub async fn validate(&self, token: &SessionToken) -> AuthResult<Option<UserName>> {
        Ok(self.lookup(token).await?.map(|session| session.user_name))
    }

    /// Drop a session. Unknown tokens are ignored.
    pub async fn revoke(&self, token: &SessionToken) -> AuthResult<()> {
        let key = token.key();
        self.repo.delete(&key).await?;
        tracing::debug!(session = %key.log_id(), "Session revoked");
        Ok(())
    }

    /// Remove every expired session now
    pub async fn sweep_expired(&self) -> AuthResult<u64> {
        self.repo.cleanup_expired(self.clock.now_ms()).await
    }

    /// Stored sessions, including expired ones not yet evicted
    pub async fn stored_count(&self) -> AuthResult<usize> {
        self.repo.count().await
    }
}

/// Run [`SessionManager::sweep_expired`] every `interval` until the runtime
/// shuts down or the handle is aborted
pub fn spawn_session_sweeper<S>(manager: SessionManager<S>, interval: Duration) -> JoinHandle<()>
where
    S: SessionRepository + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match manager.sweep_expired().await {
                Ok(0) => {}
                Ok(removed) => {
                    tracing::info!(sessions_deleted = removed, "Expired sessions swept");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Session sweep failed");
                }
            }
        }
    })
}
