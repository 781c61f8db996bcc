use axum::extract::State;
use firstbites_core::domain::notification::{
    entities::{Notification, NotificationConfig},
    ports::NotificationRepository,
};
use firstbites_core::domain::user::ports::UserRepository;

use crate::application::http::notification::validators::{
    CreateNotificationValidator, NOTIFICATION_TYPES,
};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/notifications",
    tag = "notification",
    summary = "Create notification",
    request_body = CreateNotificationValidator,
    responses(
        (status = 201, body = Notification),
        (status = 400, description = "Missing field or invalid type"),
        (status = 404, description = "User not found")
    )
)]
pub async fn create_notification(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateNotificationValidator>,
) -> Result<Response<Notification>, ApiError> {
    if !NOTIFICATION_TYPES.contains(&payload.notification_type.as_str()) {
        return Err(ApiError::BadRequest(
            "type must be one of trial_reminder, recipe_update, event_alert".to_string(),
        ));
    }

    state
        .user_repository
        .get_by_id(&payload.user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    let notification = Notification::new(NotificationConfig {
        user_id: payload.user_id,
        notification_type: payload.notification_type,
        title: payload.title,
        message: payload.message,
    });

    let created = state
        .notification_repository
        .create(notification)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
