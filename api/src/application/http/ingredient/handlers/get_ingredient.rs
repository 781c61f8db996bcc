use axum::extract::{Path, State};
use firstbites_core::domain::ingredient::{entities::Ingredient, ports::IngredientRepository};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Get ingredient",
    params(
        ("ingredient_id" = String, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = Ingredient),
        (status = 404, description = "Ingredient not found")
    )
)]
pub async fn get_ingredient(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Ingredient>, ApiError> {
    let ingredient = state
        .ingredient_repository
        .get_by_id(&ingredient_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("ingredient not found".to_string()))?;

    Ok(Response::OK(ingredient))
}
