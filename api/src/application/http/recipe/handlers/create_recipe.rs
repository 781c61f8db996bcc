use axum::extract::State;
use firstbites_core::domain::baby::ports::BabyRepository;
use firstbites_core::domain::common::parse_date;
use firstbites_core::domain::recipe::{entities::Recipe, ports::RecipeRepository};

use crate::application::http::recipe::validators::CreateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipe",
    summary = "Create recipe",
    description = "Creates a day's menu plan for a baby. Meals are added separately as items.",
    request_body = CreateRecipeValidator,
    responses(
        (status = 201, body = Recipe),
        (status = 400, description = "Missing field or malformed date"),
        (status = 404, description = "Baby not found")
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe_date = parse_date(&payload.recipe_date).map_err(ApiError::from)?;

    state
        .baby_repository
        .get_by_id(&payload.baby_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("baby not found".to_string()))?;

    let recipe = Recipe::new(
        payload.baby_id,
        recipe_date,
        payload.created_by,
        payload.notes.unwrap_or_default(),
        payload.auto_generated.unwrap_or(false),
    );

    let created = state
        .recipe_repository
        .create(recipe)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
