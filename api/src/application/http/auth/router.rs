use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::login::{__path_login, login};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(login))]
pub struct AuthApiDoc;

pub fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/auth/login", state.args.server.root_path),
        post(login),
    )
}
