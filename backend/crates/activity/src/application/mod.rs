//! Application Layer
//!
//! Use cases over the activity catalogue.

pub mod list_activities;
pub mod register_participant;
pub mod unregister_participant;

// Re-exports
pub use list_activities::ListActivitiesUseCase;
pub use register_participant::{ParticipationInput, RegisterParticipantUseCase};
pub use unregister_participant::UnregisterParticipantUseCase;
