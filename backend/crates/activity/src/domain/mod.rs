//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::Activity;
pub use repository::ActivityRepository;
pub use value_object::ParticipantEmail;
