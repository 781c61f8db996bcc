use axum::extract::{Path, State};
use firstbites_core::domain::family::{
    entities::FamilyMember,
    ports::{FamilyMemberRepository, FamilyRepository},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMembersResponse {
    pub members: Vec<FamilyMember>,
}

#[utoipa::path(
    get,
    path = "/families/{family_id}/members",
    tag = "family",
    summary = "List family members",
    params(
        ("family_id" = String, Path, description = "Family ID"),
    ),
    responses(
        (status = 200, body = GetMembersResponse),
        (status = 404, description = "Family not found")
    )
)]
pub async fn get_members(
    Path(family_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetMembersResponse>, ApiError> {
    state
        .family_repository
        .get_by_id(&family_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("family not found".to_string()))?;

    let members = state
        .member_repository
        .get_by_family(&family_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMembersResponse { members }))
}
