//! Unregister Participant Use Case

use std::sync::Arc;

use auth::models::UserName;

use crate::application::register_participant::ParticipationInput;
use crate::domain::repository::ActivityRepository;
use crate::domain::value_object::participant_email::ParticipantEmail;
use crate::error::ActivityResult;

pub struct UnregisterParticipantUseCase<A>
where
    A: ActivityRepository,
{
    activities: Arc<A>,
}

impl<A> UnregisterParticipantUseCase<A>
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
            .unregister(&input.activity_name, &email)
            .await?;

        tracing::info!(
            activity = %input.activity_name,
            participant = %email,
            teacher = %teacher,
            "Participant unregistered"
        );

        Ok(email)
    }
}
