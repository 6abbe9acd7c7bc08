//! Repository Traits

use std::collections::BTreeMap;

use crate::domain::entity::activity::Activity;
use crate::domain::value_object::participant_email::ParticipantEmail;
use crate::error::ActivityResult;

/// Activity catalogue and participant lists
///
/// `register` and `unregister` are single atomic check-and-mutate steps.
#[trait_variant::make(ActivityRepository: Send)]
pub trait LocalActivityRepository {
    /// Snapshot of every activity, keyed by name
    async fn list_all(&self) -> ActivityResult<BTreeMap<String, Activity>>;

    async fn register(&self, activity_name: &str, email: ParticipantEmail) -> ActivityResult<()>;

    async fn unregister(&self, activity_name: &str, email: &ParticipantEmail)
    -> ActivityResult<()>;
}
