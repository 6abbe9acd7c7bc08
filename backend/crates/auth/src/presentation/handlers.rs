//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, PasswordVerifier, SessionManager, SignInInput, SignInUseCase,
    SignOutUseCase,
};
use crate::domain::repository::{SessionRepository, TeacherRepository};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, LogoutResponse, SessionStatusResponse,
};
use crate::presentation::middleware::AuthMiddlewareState;

/// Shared state for auth handlers
pub struct AuthAppState<T, S>
where
    T: TeacherRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    pub teachers: Arc<T>,
    pub sessions: SessionManager<S>,
    pub verifier: Arc<PasswordVerifier>,
    pub config: Arc<AuthConfig>,
}

impl<T, S> Clone for AuthAppState<T, S>
where
    T: TeacherRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            teachers: self.teachers.clone(),
            sessions: self.sessions.clone(),
            verifier: self.verifier.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T, S> AuthAppState<T, S>
where
    T: TeacherRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    pub fn new(
        teachers: Arc<T>,
        sessions: SessionManager<S>,
        verifier: Arc<PasswordVerifier>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            teachers,
            sessions,
            verifier,
            config,
        }
    }

    /// State for [`crate::presentation::middleware::require_teacher_session`]
    pub fn middleware_state(&self) -> AuthMiddlewareState<S> {
        AuthMiddlewareState {
            sessions: self.sessions.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<T, S>(
    State(state): State<AuthAppState<T, S>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    T: TeacherRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.teachers.clone(),
        state.sessions.clone(),
        state.verifier.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .set_header(output.session_token.as_str());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Logged in successfully".to_string(),
            username: output.user_name.to_string(),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /auth/logout
pub async fn logout<T, S>(
    State(state): State<AuthAppState<T, S>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    T: TeacherRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let token = extract_session_token(&headers, &state.config);

    let use_case = SignOutUseCase::new(state.sessions.clone());
    use_case.execute(token.as_ref()).await?;

    let cookie = state.config.session_cookie().clear_header();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /auth/status
pub async fn session_status<T, S>(
    State(state): State<AuthAppState<T, S>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    T: TeacherRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let token = extract_session_token(&headers, &state.config);

    let use_case = CheckSessionUseCase::new(state.sessions.clone());

    match use_case.execute(token.as_ref()).await {
        Some(user_name) => Json(SessionStatusResponse::authenticated(user_name.to_string())),
        None => Json(SessionStatusResponse::anonymous()),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn extract_session_token(
    headers: &HeaderMap,
    config: &AuthConfig,
) -> Option<SessionToken> {
    config
        .session_cookie()
        .read(headers)
        .map(SessionToken::from_cookie)
}
