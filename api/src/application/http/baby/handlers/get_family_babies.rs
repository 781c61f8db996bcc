use axum::extract::{Path, State};
use firstbites_core::domain::baby::{entities::Baby, ports::BabyRepository};
use firstbites_core::domain::family::ports::FamilyRepository;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFamilyBabiesResponse {
    pub babies: Vec<Baby>,
}

#[utoipa::path(
    get,
    path = "/families/{family_id}/babies",
    tag = "baby",
    summary = "List babies of a family",
    params(
        ("family_id" = String, Path, description = "Family ID"),
    ),
    responses(
        (status = 200, body = GetFamilyBabiesResponse),
        (status = 404, description = "Family not found")
    )
)]
pub async fn get_family_babies(
    Path(family_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetFamilyBabiesResponse>, ApiError> {
    state
        .family_repository
        .get_by_id(&family_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("family not found".to_string()))?;

    let babies = state
        .baby_repository
        .get_by_family(&family_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFamilyBabiesResponse { babies }))
}
