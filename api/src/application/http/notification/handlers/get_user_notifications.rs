use axum::extract::{Path, Query, State};
use firstbites_core::domain::notification::{
    entities::Notification, ports::NotificationRepository,
};
use firstbites_core::domain::user::ports::UserRepository;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetUserNotificationsQuery {
    pub is_read: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUserNotificationsResponse {
    pub notifications: Vec<Notification>,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/notifications",
    tag = "notification",
    summary = "List user notifications",
    description = "Newest first, optionally narrowed to read or unread ones.",
    params(
        ("user_id" = String, Path, description = "User ID"),
        GetUserNotificationsQuery,
    ),
    responses(
        (status = 200, body = GetUserNotificationsResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_notifications(
    Path(user_id): Path<String>,
    Query(query): Query<GetUserNotificationsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetUserNotificationsResponse>, ApiError> {
    state
        .user_repository
        .get_by_id(&user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    let notifications = state
        .notification_repository
        .get_by_user(&user_id, query.is_read)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUserNotificationsResponse { notifications }))
}
