pub mod participant_email;

pub use participant_email::ParticipantEmail;
