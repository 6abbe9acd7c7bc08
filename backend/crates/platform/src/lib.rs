//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Cryptographic utilities (random tokens, SHA-256, constant-time compare)
//! - Password hashing and verification (bcrypt)
//! - Cookie management
//! - Clock abstraction for time-dependent logic

pub mod clock;
pub mod cookie;
pub mod crypto;
pub mod password;
