use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserValidator {
    /// Explicit id (usually the openid); generated when absent.
    #[serde(default)]
    pub id: Option<String>,

    #[validate(length(min = 1, message = "nickname is required"))]
    pub nickname: String,

    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[serde(default)]
    pub nickname: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,
}
