use axum::extract::{Path, State};
use firstbites_core::domain::user::{
    entities::User, ports::UserRepository, value_objects::UpdateUserInput,
};

use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::UpdateUserValidator;

#[utoipa::path(
    patch,
    path = "/{user_id}",
    tag = "user",
    summary = "Update user",
    description = "Applies only the fields present in the payload.",
    params(
        ("user_id" = String, Path, description = "User ID (openid)"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let updated = state
        .user_repository
        .update(
            &user_id,
            UpdateUserInput {
                nickname: payload.nickname,
                avatar_url: payload.avatar_url,
            },
        )
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    Ok(Response::OK(updated))
}
