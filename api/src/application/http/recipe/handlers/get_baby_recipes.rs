use axum::extract::{Path, State};
use firstbites_core::domain::baby::ports::BabyRepository;
use firstbites_core::domain::recipe::ports::RecipeRepository;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::get_recipe_by_date::RecipeWithItemsResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetBabyRecipesResponse {
    pub recipes: Vec<RecipeWithItemsResponse>,
}

#[utoipa::path(
    get,
    path = "/babies/{baby_id}/recipes",
    tag = "recipe",
    summary = "List baby recipes",
    description = "All recipes of a baby, newest date first, meals embedded.",
    params(
        ("baby_id" = String, Path, description = "Baby ID"),
    ),
    responses(
        (status = 200, body = GetBabyRecipesResponse),
        (status = 404, description = "Baby not found")
    )
)]
pub async fn get_baby_recipes(
    Path(baby_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetBabyRecipesResponse>, ApiError> {
    state
        .baby_repository
        .get_by_id(&baby_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("baby not found".to_string()))?;

    let recipes = state
        .recipe_repository
        .get_by_baby(&baby_id)
        .await
        .map_err(ApiError::from)?
        .into_iter()
        .map(RecipeWithItemsResponse::from)
        .collect();

    Ok(Response::OK(GetBabyRecipesResponse { recipes }))
}
