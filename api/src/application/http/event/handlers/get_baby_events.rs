use axum::extract::{Path, State};
use firstbites_core::domain::baby::ports::BabyRepository;
use firstbites_core::domain::event::{entities::Event, ports::EventRepository};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetBabyEventsResponse {
    pub events: Vec<Event>,
}

#[utoipa::path(
    get,
    path = "/babies/{baby_id}/events",
    tag = "event",
    summary = "List baby events",
    description = "Timeline of a baby, most recent start date first.",
    params(
        ("baby_id" = String, Path, description = "Baby ID"),
    ),
    responses(
        (status = 200, body = GetBabyEventsResponse),
        (status = 404, description = "Baby not found")
    )
)]
pub async fn get_baby_events(
    Path(baby_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetBabyEventsResponse>, ApiError> {
    state
        .baby_repository
        .get_by_id(&baby_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("baby not found".to_string()))?;

    let events = state
        .event_repository
        .get_by_baby(&baby_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetBabyEventsResponse { events }))
}
