use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::{Recipe, RecipeItem};

/// Recipe together with its meal rows, as the clients consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeWithItems {
    pub recipe: Recipe,
    pub items: Vec<RecipeItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeInput {
    pub notes: Option<String>,
    pub auto_generated: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeItemInput {
    pub meal_type: Option<String>,
    pub ingredients: Option<serde_json::Value>,
    pub instructions: Option<String>,
}
