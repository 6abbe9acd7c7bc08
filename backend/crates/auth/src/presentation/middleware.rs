//! Auth Middleware
//!
//! Gate for routes that only a signed-in teacher may call. The gate knows
//! nothing about the routes it wraps: it resolves the session cookie and
//! either rejects the request or passes it on with the teacher attached.

use axum::Router;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::{self, Next};
use axum::response::Response;
use std::sync::Arc;

use crate::application::SessionManager;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthError;
use crate::presentation::handlers::extract_session_token;

/// Middleware state
pub struct AuthMiddlewareState<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    pub sessions: SessionManager<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> Clone for AuthMiddlewareState<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            config: self.config.clone(),
        }
    }
}

/// Teacher resolved from the session, stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedTeacher {
    pub user_name: UserName,
}

impl<St> FromRequestParts<St> for AuthenticatedTeacher
where
    St: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &St) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedTeacher>()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}

/// Middleware that requires a valid teacher session
pub async fn require_teacher_session<S>(
    State(state): State<AuthMiddlewareState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    S: SessionRepository + Send + Sync + 'static,
{
    let Some(token) = extract_session_token(req.headers(), &state.config) else {
        tracing::debug!(path = %req.uri().path(), "No session cookie");
        return Err(AuthError::Unauthenticated);
    };

    let user_name = state
        .sessions
        .validate(&token)
        .await?
        .ok_or(AuthError::Unauthenticated)?;

    req.extensions_mut()
        .insert(AuthenticatedTeacher { user_name });

    Ok(next.run(req).await)
}

/// Put every route of `router` behind [`require_teacher_session`]
pub fn protect<S>(router: Router, state: AuthMiddlewareState<S>) -> Router
where
    S: SessionRepository + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(
        state,
        require_teacher_session::<S>,
    ))
}
