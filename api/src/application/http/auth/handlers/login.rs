use axum::extract::State;
use firstbites_core::domain::user::entities::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::auth::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub user: User,
    pub is_new_user: bool,
    pub openid: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "WeChat login",
    description = "Exchanges a wx.login code for a session, creating the account on first sight of the openid.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = LoginResponse),
        (status = 400, description = "Missing code"),
        (status = 502, description = "WeChat exchange failed")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let outcome = state
        .login_service
        .login(&payload.code)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        user: outcome.user,
        is_new_user: outcome.is_new_user,
        openid: outcome.session.openid,
    }))
}
