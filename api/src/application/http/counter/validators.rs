use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCountValidator {
    #[validate(length(min = 1, message = "action is required"))]
    #[serde(default)]
    pub action: String,
}
