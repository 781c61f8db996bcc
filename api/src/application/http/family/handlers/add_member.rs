use axum::extract::{Path, State};
use firstbites_core::domain::family::{
    entities::FamilyMember,
    ports::{FamilyMemberRepository, FamilyRepository},
};
use firstbites_core::domain::user::ports::UserRepository;

use crate::application::http::family::validators::AddMemberValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/families/{family_id}/members",
    tag = "family",
    summary = "Add family member",
    params(
        ("family_id" = String, Path, description = "Family ID"),
    ),
    request_body = AddMemberValidator,
    responses(
        (status = 201, body = FamilyMember),
        (status = 400, description = "Invalid role"),
        (status = 404, description = "Family or user not found"),
        (status = 409, description = "Already a member")
    )
)]
pub async fn add_member(
    Path(family_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddMemberValidator>,
) -> Result<Response<FamilyMember>, ApiError> {
    let role = payload.role.unwrap_or_else(|| "member".to_string());
    if role != "admin" && role != "member" {
        return Err(ApiError::BadRequest(
            "role must be one of admin, member".to_string(),
        ));
    }

    state
        .family_repository
        .get_by_id(&family_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("family not found".to_string()))?;

    state
        .user_repository
        .get_by_id(&payload.user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    if state
        .member_repository
        .get_member(&family_id, &payload.user_id)
        .await
        .map_err(ApiError::from)?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "user is already a member of this family".to_string(),
        ));
    }

    let member = FamilyMember::new(family_id, payload.user_id, role);

    let created = state
        .member_repository
        .create(member)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
