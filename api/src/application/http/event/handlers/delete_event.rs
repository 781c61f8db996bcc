use axum::extract::{Path, State};
use firstbites_core::domain::event::ports::EventRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/events/{event_id}",
    tag = "event",
    summary = "Delete event",
    params(
        ("event_id" = String, Path, description = "Event ID"),
    ),
    responses(
        (status = 200, description = "Event deleted"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn delete_event(
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let deleted = state
        .event_repository
        .delete(&event_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("event not found".to_string()));
    }

    Ok(Response::empty())
}
