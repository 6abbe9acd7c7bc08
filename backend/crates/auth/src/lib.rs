//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, session manager, password verifier
//! - `infra/` - Static credential store, in-memory session store
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Teacher login with username + password against a static credential record
//! - Server-side sessions referenced by an opaque cookie token
//! - `/auth/login`, `/auth/logout`, `/auth/status`
//! - Route gate ([`protect`]) for teacher-only operations
//!
//! ## Security Model
//! - Passwords stored as bcrypt hashes (cost 12), verified off the async runtime
//! - Unknown user and wrong password are indistinguishable, including timing
//! - Session tokens carry 256 bits of OS randomness; only their SHA-256 is stored
//! - Sessions expire 24 hours after login, with no sliding renewal
//! - Cookie is HttpOnly, SameSite=Lax, Secure outside development

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{PasswordVerifier, SessionManager, spawn_session_sweeper};
pub use error::{AuthError, AuthResult};
pub use infra::credential_file::{CredentialStoreError, StaticCredentialStore};
pub use infra::memory::MemorySessionStore;
pub use presentation::router::auth_router;
pub use presentation::{AuthAppState, AuthMiddlewareState, AuthenticatedTeacher, protect};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
