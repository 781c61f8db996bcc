use axum::extract::{Path, State};
use firstbites_core::domain::family::{
    entities::Family, ports::FamilyRepository, value_objects::UpdateFamilyInput,
};

use crate::application::http::family::validators::UpdateFamilyValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    patch,
    path = "/families/{family_id}",
    tag = "family",
    summary = "Rename family",
    params(
        ("family_id" = String, Path, description = "Family ID"),
    ),
    request_body = UpdateFamilyValidator,
    responses(
        (status = 200, body = Family),
        (status = 404, description = "Family not found")
    )
)]
pub async fn update_family(
    Path(family_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateFamilyValidator>,
) -> Result<Response<Family>, ApiError> {
    let updated = state
        .family_repository
        .update(&family_id, UpdateFamilyInput { name: payload.name })
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("family not found".to_string()))?;

    Ok(Response::OK(updated))
}
