//! API Server Entry Point
//!
//! Loads configuration and teacher credentials, wires the auth gate in
//! front of the activity routes and serves them. Startup failures surface
//! through `anyhow`; request errors render as `kernel` problem documents.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use activity::{ActivityAppState, MemoryActivityStore, activity_router};
use anyhow::Context;
use auth::{
    AuthAppState, MemorySessionStore, PasswordVerifier, SessionManager, StaticCredentialStore,
    auth_router, spawn_session_sweeper,
};
use axum::{
    Router, http,
    http::{Method, header},
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,activity=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Teacher credentials: any problem here aborts startup
    let password_cost = config.auth.password_cost;
    let teachers = StaticCredentialStore::load(&config.teachers_file, password_cost)
        .with_context(|| {
            format!(
                "cannot start without teacher credentials from {}",
                config.teachers_file.display()
            )
        })?;

    // Decoy hash for unknown-user logins, at the same cost as every stored hash
    let verifier = tokio::task::spawn_blocking(move || PasswordVerifier::new(password_cost))
        .await??;

    let sessions = SessionManager::new(
        Arc::new(MemorySessionStore::new()),
        config.auth.session_ttl,
    );

    match config.auth.sweep_interval {
        Some(interval) => {
            let _sweeper = spawn_session_sweeper(sessions.clone(), interval);
            tracing::info!(interval_secs = interval.as_secs(), "Session sweeper started");
        }
        None => {
            tracing::info!("Session sweeper disabled, expired sessions are evicted lazily");
        }
    }

    if !config.auth.cookie_secure {
        tracing::warn!("Session cookie is sent without the Secure attribute");
    }

    let auth_state = AuthAppState::new(
        Arc::new(teachers),
        sessions,
        Arc::new(verifier),
        Arc::new(config.auth.clone()),
    );

    let activity_state = ActivityAppState::new(Arc::new(MemoryActivityStore::seeded()));

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/auth", auth_router(auth_state.clone()))
        .merge(activity_router(activity_state, auth_state.middleware_state()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
