use axum::extract::{Path, State};
use firstbites_core::domain::baby::ports::BabyRepository;
use firstbites_core::domain::common::parse_date;
use firstbites_core::domain::food_trial::{
    entities::{FoodTrial, FoodTrialConfig},
    ports::FoodTrialRepository,
};
use firstbites_core::domain::ingredient::ports::IngredientRepository;

use crate::application::http::food_trial::validators::{CreateFoodTrialValidator, REACTION_LEVELS};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/babies/{baby_id}/food-trials",
    tag = "food_trial",
    summary = "Record food trial",
    description = "Records one exposure of a baby to an ingredient.",
    params(
        ("baby_id" = String, Path, description = "Baby ID"),
    ),
    request_body = CreateFoodTrialValidator,
    responses(
        (status = 201, body = FoodTrial),
        (status = 400, description = "Malformed date or invalid reaction level"),
        (status = 404, description = "Baby or ingredient not found")
    )
)]
pub async fn create_food_trial(
    Path(baby_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateFoodTrialValidator>,
) -> Result<Response<FoodTrial>, ApiError> {
    let reaction_level = payload.reaction_level.unwrap_or_else(|| "none".to_string());
    if !REACTION_LEVELS.contains(&reaction_level.as_str()) {
        return Err(ApiError::BadRequest(
            "reaction_level must be one of none, mild, moderate, severe".to_string(),
        ));
    }

    let trial_date = parse_date(&payload.trial_date).map_err(ApiError::from)?;

    state
        .baby_repository
        .get_by_id(&baby_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("baby not found".to_string()))?;

    state
        .ingredient_repository
        .get_by_id(&payload.ingredient_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("ingredient not found".to_string()))?;

    let trial = FoodTrial::new(FoodTrialConfig {
        baby_id,
        ingredient_id: payload.ingredient_id,
        trial_date,
        trial_count: payload.trial_count.unwrap_or(1),
        is_allergic: payload.is_allergic.unwrap_or(false),
        reaction_level,
        notes: payload.notes.unwrap_or_default(),
    });

    let created = state
        .food_trial_repository
        .create(trial)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
