use axum::extract::{Path, State};
use firstbites_core::domain::notification::ports::NotificationRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/notifications/{notification_id}",
    tag = "notification",
    summary = "Delete notification",
    params(
        ("notification_id" = String, Path, description = "Notification ID"),
    ),
    responses(
        (status = 200, description = "Notification deleted"),
        (status = 404, description = "Notification not found")
    )
)]
pub async fn delete_notification(
    Path(notification_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let deleted = state
        .notification_repository
        .delete(&notification_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("notification not found".to_string()));
    }

    Ok(Response::empty())
}
