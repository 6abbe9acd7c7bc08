//! Check Session Use Case
//!
//! Reports who, if anyone, a session cookie belongs to.

use crate::application::session_manager::SessionManager;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{session_token::SessionToken, user_name::UserName};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    sessions: SessionManager<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(sessions: SessionManager<S>) -> Self {
        Self { sessions }
    }

    /// Owning teacher of a live session, or `None`
    ///
    /// Never fails: store errors are logged and reported as anonymous.
    pub async fn execute(&self, token: Option<&SessionToken>) -> Option<UserName> {
        let token = token?;

        match self.sessions.validate(token).await {
            Ok(user_name) => user_name,
            Err(e) => {
                tracing::error!(error = %e, "Session lookup failed during status check");
                None
            }
        }
    }
}
