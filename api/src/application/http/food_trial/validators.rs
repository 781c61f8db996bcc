use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const REACTION_LEVELS: [&str; 4] = ["none", "mild", "moderate", "severe"];

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFoodTrialValidator {
    #[validate(length(min = 1, message = "ingredient_id is required"))]
    #[serde(default)]
    pub ingredient_id: String,
    #[validate(length(min = 1, message = "trial_date is required"))]
    #[serde(default)]
    pub trial_date: String,
    #[serde(default)]
    pub trial_count: Option<i32>,
    #[serde(default)]
    pub is_allergic: Option<bool>,
    #[serde(default)]
    pub reaction_level: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFoodTrialValidator {
    #[serde(default)]
    pub trial_date: Option<String>,
    #[serde(default)]
    pub trial_count: Option<i32>,
    #[serde(default)]
    pub is_allergic: Option<bool>,
    #[serde(default)]
    pub reaction_level: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
