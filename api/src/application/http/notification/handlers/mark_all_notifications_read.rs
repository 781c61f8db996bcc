use axum::extract::{Path, State};
use firstbites_core::domain::notification::ports::NotificationRepository;
use firstbites_core::domain::user::ports::UserRepository;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}

#[utoipa::path(
    patch,
    path = "/users/{user_id}/notifications/read-all",
    tag = "notification",
    summary = "Mark all notifications read",
    description = "Idempotent. Reports how many rows actually changed.",
    params(
        ("user_id" = String, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = MarkAllReadResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn mark_all_notifications_read(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<MarkAllReadResponse>, ApiError> {
    state
        .user_repository
        .get_by_id(&user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    let updated = state
        .notification_repository
        .mark_all_read(&user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MarkAllReadResponse { updated }))
}
