use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFamilyValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "created_by is required"))]
    pub created_by: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFamilyValidator {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddMemberValidator {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,

    /// `admin` or `member`; defaults to `member`.
    #[serde(default)]
    pub role: Option<String>,
}
