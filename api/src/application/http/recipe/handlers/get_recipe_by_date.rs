use axum::extract::{Query, State};
use firstbites_core::domain::common::parse_date;
use firstbites_core::domain::recipe::{
    entities::{Recipe, RecipeItem},
    ports::RecipeRepository,
    value_objects::RecipeWithItems,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

/// Wire shape of a recipe with its meals embedded.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeWithItemsResponse {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub items: Vec<RecipeItem>,
}

impl From<RecipeWithItems> for RecipeWithItemsResponse {
    fn from(value: RecipeWithItems) -> Self {
        Self {
            recipe: value.recipe,
            items: value.items,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetRecipeByDateQuery {
    pub baby_id: String,
    pub date: String,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipe",
    summary = "Get recipe for a day",
    description = "The baby's recipe for the given date, meals embedded.",
    params(GetRecipeByDateQuery),
    responses(
        (status = 200, body = RecipeWithItemsResponse),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "No recipe for that day")
    )
)]
pub async fn get_recipe_by_date(
    Query(query): Query<GetRecipeByDateQuery>,
    State(state): State<AppState>,
) -> Result<Response<RecipeWithItemsResponse>, ApiError> {
    let date = parse_date(&query.date).map_err(ApiError::from)?;

    let recipe = state
        .recipe_repository
        .get_by_baby_and_date(&query.baby_id, date)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("recipe not found".to_string()))?;

    Ok(Response::OK(recipe.into()))
}
