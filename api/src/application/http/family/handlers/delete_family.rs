use axum::extract::{Path, State};
use firstbites_core::domain::family::ports::FamilyRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/families/{family_id}",
    tag = "family",
    summary = "Delete family",
    description = "Removes the family row only; babies and memberships are left in place.",
    params(
        ("family_id" = String, Path, description = "Family ID"),
    ),
    responses(
        (status = 200, description = "Family deleted"),
        (status = 404, description = "Family not found")
    )
)]
pub async fn delete_family(
    Path(family_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let deleted = state
        .family_repository
        .delete(&family_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("family not found".to_string()));
    }

    Ok(Response::empty())
}
