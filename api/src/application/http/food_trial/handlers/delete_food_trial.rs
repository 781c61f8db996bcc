use axum::extract::{Path, State};
use firstbites_core::domain::food_trial::ports::FoodTrialRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/food-trials/{trial_id}",
    tag = "food_trial",
    summary = "Delete food trial",
    params(
        ("trial_id" = String, Path, description = "Food trial ID"),
    ),
    responses(
        (status = 200, description = "Food trial deleted"),
        (status = 404, description = "Food trial not found")
    )
)]
pub async fn delete_food_trial(
    Path(trial_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let deleted = state
        .food_trial_repository
        .delete(&trial_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("food trial not found".to_string()));
    }

    Ok(Response::empty())
}
