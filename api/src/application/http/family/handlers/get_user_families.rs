use axum::extract::{Path, State};
use firstbites_core::domain::family::{entities::Family, ports::FamilyRepository};
use firstbites_core::domain::user::ports::UserRepository;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUserFamiliesResponse {
    pub families: Vec<Family>,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/families",
    tag = "family",
    summary = "List a user's families",
    description = "Families the user belongs to, resolved through membership rows.",
    params(
        ("user_id" = String, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = GetUserFamiliesResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_families(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetUserFamiliesResponse>, ApiError> {
    state
        .user_repository
        .get_by_id(&user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    let families = state
        .family_repository
        .get_by_user(&user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUserFamiliesResponse { families }))
}
