//! Value Object Module

pub mod session_token;
pub mod user_name;

pub use session_token::{SessionKey, SessionToken};
pub use user_name::{UserName, UserNameError};
