use axum::extract::{Path, State};
use firstbites_core::domain::family::{entities::Family, ports::FamilyRepository};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/families/{family_id}",
    tag = "family",
    summary = "Get family",
    params(
        ("family_id" = String, Path, description = "Family ID"),
    ),
    responses(
        (status = 200, body = Family),
        (status = 404, description = "Family not found")
    )
)]
pub async fn get_family(
    Path(family_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Family>, ApiError> {
    let family = state
        .family_repository
        .get_by_id(&family_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("family not found".to_string()))?;

    Ok(Response::OK(family))
}
