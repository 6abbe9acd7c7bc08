//! Sign Out Use Case
//!
//! Invalidates a teacher session.

use crate::application::session_manager::SessionManager;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    sessions: SessionManager<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(sessions: SessionManager<S>) -> Self {
        Self { sessions }
    }

    /// Sign out from the session behind `token`, if any
    ///
    /// Signing out without a session is already the desired end state.
    pub async fn execute(&self, token: Option<&SessionToken>) -> AuthResult<()> {
        match token {
            Some(token) => {
                if let Some(user_name) = self.sessions.validate(token).await? {
                    tracing::info!(user_name = %user_name, "Teacher signed out");
                }
                self.sessions.revoke(token).await
            }
            None => Ok(()),
        }
    }
}
