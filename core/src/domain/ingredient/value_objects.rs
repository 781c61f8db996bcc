use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateIngredientInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub risk_level: Option<String>,
    pub nutrients: Option<serde_json::Value>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub suitable_month_from: Option<i32>,
    pub suitable_month_to: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct ListIngredientsFilter {
    pub page: u64,
    pub page_size: u64,
    pub category: Option<String>,
}
