//! Register Participant Use Case
//!
//! Teacher-only. The caller is resolved by the auth gate before this runs.

use std::sync::Arc;

use auth::models::UserName;

use crate::domain::repository::ActivityRepository;
use crate::domain::value_object::participant_email::ParticipantEmail;
use crate::error::ActivityResult;

/// Input shared by register and unregister
pub struct ParticipationInput {
    pub activity_name: String,
    pub email: String,
}

pub struct RegisterParticipantUseCase<A>
where
    A: ActivityRepository,
{
    activities: Arc<A>,
}

impl<A> RegisterParticipantUseCase<A>
where
    A: ActivityRepository,
{
    pub fn new(activities: Arc<A>) -> Self {
        Self { activities }
    }

    pub async fn execute(
        &self,
        input: ParticipationInput,
        teacher: &UserName,
    ) -> ActivityResult<ParticipantEmail> {
        let email = ParticipantEmail::new(input.email)?;

        self.activities
            .register(&input.activity_name, email.clone())
            .await?;

        tracing::info!(
            activity = %input.activity_name,
            participant = %email,
            teacher = %teacher,
            "Participant registered"
        );

        Ok(email)
    }
}
