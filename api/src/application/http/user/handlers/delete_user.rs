use axum::extract::{Path, State};
use firstbites_core::domain::user::ports::UserRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{user_id}",
    tag = "user",
    summary = "Delete user",
    params(
        ("user_id" = String, Path, description = "User ID (openid)"),
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let deleted = state
        .user_repository
        .delete(&user_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("user not found".to_string()));
    }

    Ok(Response::empty())
}
