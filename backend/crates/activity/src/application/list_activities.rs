//! List Activities Use Case

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entity::activity::Activity;
use crate::domain::repository::ActivityRepository;
use crate::error::ActivityResult;

pub struct ListActivitiesUseCase<A>
where
    A: ActivityRepository,
{
    activities: Arc<A>,
}

impl<A> ListActivitiesUseCase<A>
where
    A: ActivityRepository,
{
    pub fn new(activities: Arc<A>) -> Self {
        Self { activities }
    }

    pub async fn execute(&self) -> ActivityResult<BTreeMap<String, Activity>> {
        self.activities.list_all().await
    }
}
