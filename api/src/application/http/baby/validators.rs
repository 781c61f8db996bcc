use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBabyValidator {
    #[validate(length(min = 1, message = "nickname is required"))]
    pub nickname: String,

    /// `M` or `F`.
    #[validate(length(min = 1, message = "gender is required"))]
    pub gender: String,

    /// `YYYY-MM-DD`.
    #[validate(length(min = 1, message = "birth_date is required"))]
    pub birth_date: String,

    #[validate(length(min = 1, message = "created_by is required"))]
    pub created_by: String,

    /// When absent the caller's first family is used, or a new family
    /// is provisioned.
    #[serde(default)]
    pub family_id: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub avoid_ingredients: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBabyValidator {
    #[serde(default)]
    pub nickname: Option<String>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub birth_date: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub avoid_ingredients: Option<Vec<String>>,
}
