use axum::extract::{Path, State};
use firstbites_core::domain::recipe::{
    entities::RecipeItem, ports::RecipeItemRepository, value_objects::UpdateRecipeItemInput,
};

use crate::application::http::recipe::validators::{MEAL_TYPES, UpdateRecipeItemValidator};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    patch,
    path = "/recipe-items/{item_id}",
    tag = "recipe",
    summary = "Update recipe item",
    params(
        ("item_id" = String, Path, description = "Recipe item ID"),
    ),
    request_body = UpdateRecipeItemValidator,
    responses(
        (status = 200, body = RecipeItem),
        (status = 400, description = "Invalid meal type"),
        (status = 404, description = "Recipe item not found")
    )
)]
pub async fn update_recipe_item(
    Path(item_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateRecipeItemValidator>,
) -> Result<Response<RecipeItem>, ApiError> {
    if let Some(meal_type) = &payload.meal_type {
        if !MEAL_TYPES.contains(&meal_type.as_str()) {
            return Err(ApiError::BadRequest(
                "meal_type must be one of breakfast, morning_snack, lunch, afternoon_snack, dinner"
                    .to_string(),
            ));
        }
    }

    let updated = state
        .recipe_item_repository
        .update(
            &item_id,
            UpdateRecipeItemInput {
                meal_type: payload.meal_type,
                ingredients: payload.ingredients,
                instructions: payload.instructions,
            },
        )
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("recipe item not found".to_string()))?;

    Ok(Response::OK(updated))
}
