//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::{SessionRepository, TeacherRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router (`/login`, `/logout`, `/status`)
///
/// Mount under `/auth`.
pub fn auth_router<T, S>(state: AuthAppState<T, S>) -> Router
where
    T: TeacherRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(handlers::login::<T, S>))
        .route("/logout", post(handlers::logout::<T, S>))
        .route("/status", get(handlers::session_status::<T, S>))
        .with_state(state)
}
