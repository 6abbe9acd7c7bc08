//! Repository Traits
//!
//! Interfaces for credential lookup and session storage. Implementations
//! live in the infrastructure layer; replacing the in-memory session store
//! with a shared one only requires another [`SessionRepository`].

use crate::domain::entity::{auth_session::AuthSession, teacher_account::TeacherAccount};
use crate::domain::value_object::{session_token::SessionKey, user_name::UserName};
use crate::error::AuthResult;

/// Read-only teacher credential store
#[trait_variant::make(TeacherRepository: Send)]
pub trait LocalTeacherRepository {
    /// Find a teacher by exact (case-sensitive) user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<TeacherAccount>>;
}

/// Auth session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Store a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find a session that is still live at `now_ms`
    ///
    /// An entry found already expired is removed before returning `None`.
    async fn find_live(&self, key: &SessionKey, now_ms: i64) -> AuthResult<Option<AuthSession>>;

    /// Delete a session; deleting a missing key is not an error
    async fn delete(&self, key: &SessionKey) -> AuthResult<()>;

    /// Remove every session expired at `now_ms`, returning how many were removed
    async fn cleanup_expired(&self, now_ms: i64) -> AuthResult<u64>;

    /// Number of stored sessions, expired ones included
    async fn count(&self) -> AuthResult<usize>;
}
