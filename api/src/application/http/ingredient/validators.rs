use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIngredientValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[serde(default)]
    pub image_url: Option<String>,

    /// `low`, `medium` or `high`; defaults to `low`.
    #[serde(default)]
    pub risk_level: Option<String>,

    #[serde(default)]
    pub nutrients: Option<serde_json::Value>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub suitable_month_from: Option<i32>,

    #[serde(default)]
    pub suitable_month_to: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateIngredientValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub risk_level: Option<String>,

    #[serde(default)]
    pub nutrients: Option<serde_json::Value>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub suitable_month_from: Option<i32>,

    #[serde(default)]
    pub suitable_month_to: Option<i32>,
}

pub const RISK_LEVELS: [&str; 3] = ["low", "medium", "high"];
