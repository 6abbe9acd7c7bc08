//! Activity Entity

use serde::Serialize;

use crate::domain::value_object::participant_email::ParticipantEmail;
use crate::error::{ActivityError, ActivityResult};

/// Extracurricular activity and its participant list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Sign-up order
    pub participants: Vec<ParticipantEmail>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, participants: Vec<ParticipantEmail>) -> Self {
        self.participants = participants;
        self
    }

    pub fn has_participant(&self, email: &ParticipantEmail) -> bool {
        self.participants.contains(email)
    }

    /// Append `email`; a second sign-up of the same address is rejected
    pub fn register(&mut self, email: ParticipantEmail) -> ActivityResult<()> {
        if self.has_participant(&email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        self.participants.push(email);
        Ok(())
    }

    pub fn unregister(&mut self, email: &ParticipantEmail) -> ActivityResult<()> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(ActivityError::NotSignedUp)?;
        self.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(raw: &str) -> ParticipantEmail {
        ParticipantEmail::new(raw).unwrap()
    }

    #[test]
    fn test_register_keeps_order_and_rejects_duplicates() {
        let mut chess = Activity::new("Chess Club", "Chess", "Fridays", 12);
        chess.register(email("michael@mergington.edu")).unwrap();
        chess.register(email("daniel@mergington.edu")).unwrap();

        assert!(matches!(
            chess.register(email("michael@mergington.edu")),
            Err(ActivityError::AlreadySignedUp)
        ));
        assert_eq!(
            chess.participants,
            vec![email("michael@mergington.edu"), email("daniel@mergington.edu")]
        );
    }

    #[test]
    fn test_unregister() {
        let mut chess = Activity::new("Chess Club", "Chess", "Fridays", 12)
            .with_participants(vec![email("a@x.edu"), email("b@x.edu"), email("c@x.edu")]);

        chess.unregister(&email("b@x.edu")).unwrap();
        assert_eq!(chess.participants, vec![email("a@x.edu"), email("c@x.edu")]);

        assert!(matches!(
            chess.unregister(&email("b@x.edu")),
            Err(ActivityError::NotSignedUp)
        ));
    }

    #[test]
    fn test_serialized_shape() {
        let chess = Activity::new("Chess Club", "Chess", "Fridays", 12)
            .with_participants(vec![email("a@x.edu")]);
        assert_eq!(
            serde_json::to_value(&chess).unwrap(),
            serde_json::json!({
                "description": "Chess",
                "schedule": "Fridays",
                "max_participants": 12,
                "participants": ["a@x.edu"]
            })
        );
    }
}
