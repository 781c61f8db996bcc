use axum::extract::{Path, State};
use firstbites_core::domain::recipe::ports::RecipeRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Delete recipe",
    description = "Removes the recipe and its meal rows in one transaction.",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, description = "Recipe deleted"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let deleted = state
        .recipe_repository
        .delete(&recipe_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("recipe not found".to_string()));
    }

    Ok(Response::empty())
}
