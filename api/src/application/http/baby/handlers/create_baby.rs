use axum::extract::State;
use firstbites_core::domain::baby::{entities::Baby, value_objects::CreateBabyInput};
use firstbites_core::domain::common::parse_date;
use firstbites_core::domain::family::entities::Family;
use firstbites_core::domain::user::ports::UserRepository;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::baby::validators::CreateBabyValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateBabyResponse {
    pub baby: Baby,
    /// Set when registration provisioned a new family for the caller.
    pub created_family: Option<Family>,
}

#[utoipa::path(
    post,
    path = "/babies",
    tag = "baby",
    summary = "Register baby",
    description = "Registers a baby. Without a family_id the caller's first family is reused, or a fresh family is provisioned with the caller as admin.",
    request_body = CreateBabyValidator,
    responses(
        (status = 201, body = CreateBabyResponse),
        (status = 400, description = "Missing field or malformed date"),
        (status = 404, description = "Creator or family not found")
    )
)]
pub async fn create_baby(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateBabyValidator>,
) -> Result<Response<CreateBabyResponse>, ApiError> {
    if payload.gender != "M" && payload.gender != "F" {
        return Err(ApiError::BadRequest("gender must be one of M, F".to_string()));
    }

    let birth_date = parse_date(&payload.birth_date).map_err(ApiError::from)?;

    state
        .user_repository
        .get_by_id(&payload.created_by)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    let outcome = state
        .baby_service
        .create_baby(CreateBabyInput {
            family_id: payload.family_id,
            created_by: payload.created_by,
            nickname: payload.nickname,
            gender: payload.gender,
            birth_date,
            avatar_url: payload.avatar_url.unwrap_or_default(),
            avoid_ingredients: payload.avoid_ingredients.unwrap_or_default(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateBabyResponse {
        baby: outcome.baby,
        created_family: outcome.created_family,
    }))
}
