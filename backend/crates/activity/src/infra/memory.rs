//! In-Memory Activity Store
//!
//! The catalogue lives for the process lifetime. Every mutation is one
//! write-locked check-and-mutate step.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::entity::activity::Activity;
use crate::domain::repository::ActivityRepository;
use crate::domain::value_object::participant_email::ParticipantEmail;
use crate::error::{ActivityError, ActivityResult};

#[derive(Clone, Default)]
pub struct MemoryActivityStore {
    activities: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl MemoryActivityStore {
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        let map = activities
            .into_iter()
            .map(|activity| (activity.name.clone(), activity))
            .collect();
        Self {
            activities: Arc::new(RwLock::new(map)),
        }
    }

    /// Store holding the school's standard catalogue
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }
}

impl ActivityRepository for MemoryActivityStore {
    async fn list_all(&self) -> ActivityResult<BTreeMap<String, Activity>> {
        Ok(self.activities.read().clone())
    }

    async fn register(&self, activity_name: &str, email: ParticipantEmail) -> ActivityResult<()> {
        let mut activities = self.activities.write();
        activities
            .get_mut(activity_name)
            .ok_or(ActivityError::NotFound)?
            .register(email)
    }

    async fn unregister(
        &self,
        activity_name: &str,
        email: &ParticipantEmail,
    ) -> ActivityResult<()> {
        let mut activities = self.activities.write();
        activities
            .get_mut(activity_name)
            .ok_or(ActivityError::NotFound)?
            .unregister(email)
    }
}

fn seed_activities() -> Vec<Activity> {
    const SEED: [(&str, &str, &str, u32, [&str; 2]); 9] = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
        (
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            ["liam@mergington.edu", "noah@mergington.edu"],
        ),
        (
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            ["ava@mergington.edu", "mia@mergington.edu"],
        ),
        (
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            ["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        (
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            ["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        (
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            ["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        (
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            ["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ];

    SEED.iter()
        .map(|(name, description, schedule, max, participants)| {
            Activity::new(*name, *description, *schedule, *max).with_participants(
                participants
                    .iter()
                    .filter_map(|email| ParticipantEmail::new(*email).ok())
                    .collect(),
            )
        })
        .collect()
}
