//! Activity Backend Module
//!
//! Extracurricular activity catalogue and participant sign-ups.
//!
//! - `GET /activities` is open to everyone
//! - `POST /activities/{activity_name}/signup` and
//!   `DELETE /activities/{activity_name}/unregister` require a teacher session
//!   (see [`auth::protect`])

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{ActivityError, ActivityResult};
pub use infra::memory::MemoryActivityStore;
pub use presentation::{ActivityAppState, activity_router};
