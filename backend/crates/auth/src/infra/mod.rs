//! Infrastructure Layer
//!
//! Repository implementations.

pub mod credential_file;
pub mod memory;
