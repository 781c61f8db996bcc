use axum::extract::{Path, State};
use firstbites_core::domain::family::ports::FamilyMemberRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/families/{family_id}/members/{user_id}",
    tag = "family",
    summary = "Remove family member",
    params(
        ("family_id" = String, Path, description = "Family ID"),
        ("user_id" = String, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Member removed"),
        (status = 404, description = "Membership not found")
    )
)]
pub async fn remove_member(
    Path((family_id, user_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let deleted = state
        .member_repository
        .delete(&family_id, &user_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("membership not found".to_string()));
    }

    Ok(Response::empty())
}
