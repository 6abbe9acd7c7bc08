//! Activity Router

use auth::AuthMiddlewareState;
use auth::domain::repository::SessionRepository;
use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::domain::repository::ActivityRepository;
use crate::presentation::handlers::{self, ActivityAppState};

/// Create the activity router
///
/// Listing is public. Signup and unregister sit behind the teacher session
/// gate.
pub fn activity_router<A, S>(state: ActivityAppState<A>, gate: AuthMiddlewareState<S>) -> Router
where
    A: ActivityRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let public = Router::new()
        .route("/activities", get(handlers::list_activities::<A>))
        .with_state(state.clone());

    let protected = Router::new()
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::signup::<A>),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(handlers::unregister::<A>),
        )
        .with_state(state);

    public.merge(auth::protect(protected, gate))
}
