use axum::extract::{Path, State};
use firstbites_core::domain::common::parse_date;
use firstbites_core::domain::food_trial::{
    entities::FoodTrial, ports::FoodTrialRepository, value_objects::UpdateFoodTrialInput,
};

use crate::application::http::food_trial::validators::{REACTION_LEVELS, UpdateFoodTrialValidator};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    patch,
    path = "/food-trials/{trial_id}",
    tag = "food_trial",
    summary = "Update food trial",
    params(
        ("trial_id" = String, Path, description = "Food trial ID"),
    ),
    request_body = UpdateFoodTrialValidator,
    responses(
        (status = 200, body = FoodTrial),
        (status = 400, description = "Malformed date or invalid reaction level"),
        (status = 404, description = "Food trial not found")
    )
)]
pub async fn update_food_trial(
    Path(trial_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateFoodTrialValidator>,
) -> Result<Response<FoodTrial>, ApiError> {
    if let Some(reaction_level) = &payload.reaction_level {
        if !REACTION_LEVELS.contains(&reaction_level.as_str()) {
            return Err(ApiError::BadRequest(
                "reaction_level must be one of none, mild, moderate, severe".to_string(),
            ));
        }
    }

    let trial_date = payload
        .trial_date
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(ApiError::from)?;

    let updated = state
        .food_trial_repository
        .update(
            &trial_id,
            UpdateFoodTrialInput {
                trial_date,
                trial_count: payload.trial_count,
                is_allergic: payload.is_allergic,
                reaction_level: payload.reaction_level,
                notes: payload.notes,
            },
        )
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("food trial not found".to_string()))?;

    Ok(Response::OK(updated))
}
