use axum::extract::{Path, State};
use firstbites_core::domain::baby::{entities::Baby, ports::BabyRepository};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/babies/{baby_id}",
    tag = "baby",
    summary = "Get baby",
    params(
        ("baby_id" = String, Path, description = "Baby ID"),
    ),
    responses(
        (status = 200, body = Baby),
        (status = 404, description = "Baby not found")
    )
)]
pub async fn get_baby(
    Path(baby_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Baby>, ApiError> {
    let baby = state
        .baby_repository
        .get_by_id(&baby_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("baby not found".to_string()))?;

    Ok(Response::OK(baby))
}
