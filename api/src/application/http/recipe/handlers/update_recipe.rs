use axum::extract::{Path, State};
use firstbites_core::domain::recipe::{
    entities::Recipe, ports::RecipeRepository, value_objects::UpdateRecipeInput,
};

use crate::application::http::recipe::validators::UpdateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    patch,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    request_body = UpdateRecipeValidator,
    responses(
        (status = 200, body = Recipe),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn update_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateRecipeValidator>,
) -> Result<Response<Recipe>, ApiError> {
    let updated = state
        .recipe_repository
        .update(
            &recipe_id,
            UpdateRecipeInput {
                notes: payload.notes,
                auto_generated: payload.auto_generated,
            },
        )
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("recipe not found".to_string()))?;

    Ok(Response::OK(updated))
}
