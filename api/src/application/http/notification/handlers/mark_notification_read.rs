use axum::extract::{Path, State};
use firstbites_core::domain::notification::{
    entities::Notification, ports::NotificationRepository,
};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    patch,
    path = "/notifications/{notification_id}/read",
    tag = "notification",
    summary = "Mark notification read",
    description = "Idempotent. Marking an already-read notification is a no-op.",
    params(
        ("notification_id" = String, Path, description = "Notification ID"),
    ),
    responses(
        (status = 200, body = Notification),
        (status = 404, description = "Notification not found")
    )
)]
pub async fn mark_notification_read(
    Path(notification_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Notification>, ApiError> {
    let notification = state
        .notification_repository
        .mark_read(&notification_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("notification not found".to_string()))?;

    Ok(Response::OK(notification))
}
