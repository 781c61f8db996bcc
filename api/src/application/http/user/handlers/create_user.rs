use axum::extract::State;
use firstbites_core::domain::common::generate_id;
use firstbites_core::domain::user::{entities::User, ports::UserRepository};

use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::CreateUserValidator;

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Create user",
    description = "Registers a user explicitly, outside the WeChat login flow.",
    request_body = CreateUserValidator,
    responses(
        (status = 201, body = User),
        (status = 400, description = "Missing nickname"),
        (status = 409, description = "User already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let id = payload.id.unwrap_or_else(generate_id);

    if state
        .user_repository
        .get_by_id(&id)
        .await
        .map_err(ApiError::from)?
        .is_some()
    {
        return Err(ApiError::Conflict("user already exists".to_string()));
    }

    let user = User::new(id, payload.nickname, payload.avatar_url.unwrap_or_default());

    let created = state
        .user_repository
        .create(user)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
