use axum::extract::{Path, State};
use firstbites_core::domain::common::parse_date;
use firstbites_core::domain::event::{
    entities::Event, ports::EventRepository, value_objects::UpdateEventInput,
};

use crate::application::http::event::validators::{EVENT_TYPES, UpdateEventValidator};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    patch,
    path = "/events/{event_id}",
    tag = "event",
    summary = "Update event",
    description = "Partial update. Sending end_date as null reopens the event.",
    params(
        ("event_id" = String, Path, description = "Event ID"),
    ),
    request_body = UpdateEventValidator,
    responses(
        (status = 200, body = Event),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn update_event(
    Path(event_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateEventValidator>,
) -> Result<Response<Event>, ApiError> {
    if let Some(event_type) = &payload.event_type {
        if !EVENT_TYPES.contains(&event_type.as_str()) {
            return Err(ApiError::BadRequest(
                "event_type must be one of illness, vaccine, other".to_string(),
            ));
        }
    }

    let start_date = payload
        .start_date
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(ApiError::from)?;

    let end_date = match payload.end_date {
        None => None,
        Some(None) => Some(None),
        Some(Some(raw)) => Some(Some(parse_date(&raw).map_err(ApiError::from)?)),
    };

    let updated = state
        .event_repository
        .update(
            &event_id,
            UpdateEventInput {
                event_type: payload.event_type,
                start_date,
                end_date,
                description: payload.description,
            },
        )
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("event not found".to_string()))?;

    Ok(Response::OK(updated))
}
