use axum::extract::{Path, State};
use firstbites_core::domain::user::{entities::User, ports::UserRepository};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    params(
        ("user_id" = String, Path, description = "User ID (openid)"),
    ),
    responses(
        (status = 200, body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .user_repository
        .get_by_id(&user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    Ok(Response::OK(user))
}
