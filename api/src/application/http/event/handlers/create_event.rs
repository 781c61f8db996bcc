use axum::extract::State;
use firstbites_core::domain::baby::ports::BabyRepository;
use firstbites_core::domain::common::parse_date;
use firstbites_core::domain::event::{
    entities::{Event, EventConfig},
    ports::EventRepository,
};

use crate::application::http::event::validators::{CreateEventValidator, EVENT_TYPES};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/events",
    tag = "event",
    summary = "Record event",
    description = "Adds an entry to a baby's care timeline. Leave end_date out for an ongoing event.",
    request_body = CreateEventValidator,
    responses(
        (status = 201, body = Event),
        (status = 400, description = "Missing field or malformed date"),
        (status = 404, description = "Baby not found")
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateEventValidator>,
) -> Result<Response<Event>, ApiError> {
    if !EVENT_TYPES.contains(&payload.event_type.as_str()) {
        return Err(ApiError::BadRequest(
            "event_type must be one of illness, vaccine, other".to_string(),
        ));
    }

    let start_date = parse_date(&payload.start_date).map_err(ApiError::from)?;
    let end_date = payload
        .end_date
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(ApiError::from)?;

    state
        .baby_repository
        .get_by_id(&payload.baby_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("baby not found".to_string()))?;

    let event = Event::new(EventConfig {
        baby_id: payload.baby_id,
        event_type: payload.event_type,
        start_date,
        end_date,
        description: payload.description.unwrap_or_default(),
    });

    let created = state
        .event_repository
        .create(event)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
