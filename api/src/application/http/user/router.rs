use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_user::{__path_create_user, create_user},
    delete_user::{__path_delete_user, delete_user},
    get_user::{__path_get_user, get_user},
    update_user::{__path_update_user, update_user},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_user, get_user, update_user, delete_user))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/users", state.args.server.root_path),
            post(create_user),
        )
        .route(
            &format!("{}/api/users/{{user_id}}", state.args.server.root_path),
            get(get_user).patch(update_user).delete(delete_user),
        )
}
