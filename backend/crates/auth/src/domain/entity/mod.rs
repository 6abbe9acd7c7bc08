//! Entity Module

pub mod auth_session;
pub mod teacher_account;

pub use auth_session::AuthSession;
pub use teacher_account::TeacherAccount;
