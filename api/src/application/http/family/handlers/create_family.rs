use axum::extract::State;
use firstbites_core::domain::family::{
    entities::{Family, FamilyMember},
    ports::FamilyRepository,
};
use firstbites_core::domain::user::ports::UserRepository;

use crate::application::http::family::validators::CreateFamilyValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/families",
    tag = "family",
    summary = "Create family",
    description = "Creates a family and adds the creator as its admin in the same transaction.",
    request_body = CreateFamilyValidator,
    responses(
        (status = 201, body = Family),
        (status = 400, description = "Missing name or created_by"),
        (status = 404, description = "Creator not found")
    )
)]
pub async fn create_family(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateFamilyValidator>,
) -> Result<Response<Family>, ApiError> {
    state
        .user_repository
        .get_by_id(&payload.created_by)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    let family = Family::new(payload.name, payload.created_by.clone());
    let admin = FamilyMember::admin(family.id.clone(), payload.created_by);

    let created = state
        .family_repository
        .create_with_admin(family, admin)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
