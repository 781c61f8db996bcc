use axum::extract::{Path, State};
use firstbites_core::domain::recipe::{
    entities::RecipeItem,
    ports::{RecipeItemRepository, RecipeRepository},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeItemsResponse {
    pub items: Vec<RecipeItem>,
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}/items",
    tag = "recipe",
    summary = "List recipe items",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = GetRecipeItemsResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe_items(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeItemsResponse>, ApiError> {
    state
        .recipe_repository
        .get_by_id(&recipe_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("recipe not found".to_string()))?;

    let items = state
        .recipe_item_repository
        .get_by_recipe(&recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeItemsResponse { items }))
}
