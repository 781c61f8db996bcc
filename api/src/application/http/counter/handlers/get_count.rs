use axum::extract::State;
use firstbites_core::domain::counter::ports::CounterRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/count",
    tag = "counter",
    summary = "Read the demo counter",
    description = "Returns 0 when the counter row does not exist.",
    responses(
        (status = 200, body = i32)
    )
)]
pub async fn get_count(
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let count = state
        .counter_repository
        .get(1)
        .await
        .map_err(ApiError::from)?
        .map(|counter| counter.count)
        .unwrap_or(0);

    Ok(Response::OK(serde_json::json!(count)))
}
