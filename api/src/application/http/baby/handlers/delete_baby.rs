use axum::extract::{Path, State};
use firstbites_core::domain::baby::ports::BabyRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/babies/{baby_id}",
    tag = "baby",
    summary = "Delete baby",
    description = "Removes the baby row only; trials, recipes and events are left in place.",
    params(
        ("baby_id" = String, Path, description = "Baby ID"),
    ),
    responses(
        (status = 200, description = "Baby deleted"),
        (status = 404, description = "Baby not found")
    )
)]
pub async fn delete_baby(
    Path(baby_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let deleted = state
        .baby_repository
        .delete(&baby_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("baby not found".to_string()));
    }

    Ok(Response::empty())
}
