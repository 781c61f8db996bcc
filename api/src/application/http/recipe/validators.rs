use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const MEAL_TYPES: [&str; 5] = [
    "breakfast",
    "morning_snack",
    "lunch",
    "afternoon_snack",
    "dinner",
];

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, message = "baby_id is required"))]
    #[serde(default)]
    pub baby_id: String,
    #[validate(length(min = 1, message = "recipe_date is required"))]
    #[serde(default)]
    pub recipe_date: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub auto_generated: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeValidator {
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub auto_generated: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeItemValidator {
    #[validate(length(min = 1, message = "meal_type is required"))]
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub ingredients: Option<serde_json::Value>,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeItemValidator {
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub ingredients: Option<serde_json::Value>,
    #[serde(default)]
    pub instructions: Option<String>,
}
