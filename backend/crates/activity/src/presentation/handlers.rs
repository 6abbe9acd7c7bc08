//! HTTP Handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use auth::AuthenticatedTeacher;
use axum::Json;
use axum::extract::{Path, Query, State};

use crate::application::{
    ListActivitiesUseCase, ParticipationInput, RegisterParticipantUseCase,
    UnregisterParticipantUseCase,
};
use crate::domain::entity::activity::Activity;
use crate::domain::repository::ActivityRepository;
use crate::error::ActivityResult;
use crate::presentation::dto::{MessageResponse, ParticipantQuery};

/// Shared state for activity handlers
pub struct ActivityAppState<A>
where
    A: ActivityRepository + Send + Sync + 'static,
{
    pub activities: Arc<A>,
}

impl<A> Clone for ActivityAppState<A>
where
    A: ActivityRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            activities: self.activities.clone(),
        }
    }
}

impl<A> ActivityAppState<A>
where
    A: ActivityRepository + Send + Sync + 'static,
{
    pub fn new(activities: Arc<A>) -> Self {
        Self { activities }
    }
}

/// GET /activities
pub async fn list_activities<A>(
    State(state): State<ActivityAppState<A>>,
) -> ActivityResult<Json<BTreeMap<String, Activity>>>
where
    A: ActivityRepository + Send + Sync + 'static,
{
    let use_case = ListActivitiesUseCase::new(state.activities.clone());
    Ok(Json(use_case.execute().await?))
}

/// POST /activities/{activity_name}/signup?email=
pub async fn signup<A>(
    State(state): State<ActivityAppState<A>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    teacher: AuthenticatedTeacher,
) -> ActivityResult<Json<MessageResponse>>
where
    A: ActivityRepository + Send + Sync + 'static,
{
    let use_case = RegisterParticipantUseCase::new(state.activities.clone());
    let email = use_case
        .execute(
            ParticipationInput {
                activity_name: activity_name.clone(),
                email: query.email,
            },
            &teacher.user_name,
        )
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Signed up {email} for {activity_name}"
    ))))
}

/// DELETE /activities/{activity_name}/unregister?email=
pub async fn unregister<A>(
    State(state): State<ActivityAppState<A>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    teacher: AuthenticatedTeacher,
) -> ActivityResult<Json<MessageResponse>>
where
    A: ActivityRepository + Send + Sync + 'static,
{
    let use_case = UnregisterParticipantUseCase::new(state.activities.clone());
    let email = use_case
        .execute(
            ParticipationInput {
                activity_name: activity_name.clone(),
                email: query.email,
            },
            &teacher.user_name,
        )
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Unregistered {email} from {activity_name}"
    ))))
}
