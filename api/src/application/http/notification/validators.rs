use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const NOTIFICATION_TYPES: [&str; 3] = ["trial_reminder", "recipe_update", "event_alert"];

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNotificationValidator {
    #[validate(length(min = 1, message = "user_id is required"))]
    #[serde(default)]
    pub user_id: String,
    #[validate(length(min = 1, message = "type is required"))]
    #[serde(default, rename = "type")]
    pub notification_type: String,
    #[validate(length(min = 1, message = "title is required"))]
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
}
