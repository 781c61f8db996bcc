use axum::extract::{Path, State};
use firstbites_core::domain::ingredient::ports::IngredientRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Delete ingredient",
    params(
        ("ingredient_id" = String, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, description = "Ingredient deleted"),
        (status = 404, description = "Ingredient not found")
    )
)]
pub async fn delete_ingredient(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let deleted = state
        .ingredient_repository
        .delete(&ingredient_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("ingredient not found".to_string()));
    }

    Ok(Response::empty())
}
