//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// `?email=` query of signup and unregister
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

/// Confirmation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
