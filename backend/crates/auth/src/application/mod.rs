//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod password_verifier;
pub mod session_manager;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use password_verifier::PasswordVerifier;
pub use session_manager::{SessionManager, spawn_session_sweeper};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
