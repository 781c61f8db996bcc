use axum::extract::{Path, State};
use firstbites_core::domain::baby::ports::BabyRepository;
use firstbites_core::domain::food_trial::{entities::FoodTrial, ports::FoodTrialRepository};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetBabyFoodTrialsResponse {
    pub trials: Vec<FoodTrial>,
}

#[utoipa::path(
    get,
    path = "/babies/{baby_id}/food-trials",
    tag = "food_trial",
    summary = "List baby food trials",
    params(
        ("baby_id" = String, Path, description = "Baby ID"),
    ),
    responses(
        (status = 200, body = GetBabyFoodTrialsResponse),
        (status = 404, description = "Baby not found")
    )
)]
pub async fn get_baby_food_trials(
    Path(baby_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetBabyFoodTrialsResponse>, ApiError> {
    state
        .baby_repository
        .get_by_id(&baby_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("baby not found".to_string()))?;

    let trials = state
        .food_trial_repository
        .get_by_baby(&baby_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetBabyFoodTrialsResponse { trials }))
}
