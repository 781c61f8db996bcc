use axum::extract::{Path, State};
use firstbites_core::domain::recipe::{
    entities::RecipeItem,
    ports::{RecipeItemRepository, RecipeRepository},
};

use crate::application::http::recipe::validators::{CreateRecipeItemValidator, MEAL_TYPES};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/recipes/{recipe_id}/items",
    tag = "recipe",
    summary = "Add recipe item",
    description = "Adds one meal to a recipe.",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    request_body = CreateRecipeItemValidator,
    responses(
        (status = 201, body = RecipeItem),
        (status = 400, description = "Invalid meal type"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn create_recipe_item(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateRecipeItemValidator>,
) -> Result<Response<RecipeItem>, ApiError> {
    if !MEAL_TYPES.contains(&payload.meal_type.as_str()) {
        return Err(ApiError::BadRequest(
            "meal_type must be one of breakfast, morning_snack, lunch, afternoon_snack, dinner"
                .to_string(),
        ));
    }

    state
        .recipe_repository
        .get_by_id(&recipe_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("recipe not found".to_string()))?;

    let item = RecipeItem::new(
        recipe_id,
        payload.meal_type,
        payload.ingredients.unwrap_or_else(|| serde_json::json!([])),
        payload.instructions.unwrap_or_default(),
    );

    let created = state
        .recipe_item_repository
        .create(item)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
