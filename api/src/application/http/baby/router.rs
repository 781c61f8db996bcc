use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_baby::{__path_create_baby, create_baby},
    delete_baby::{__path_delete_baby, delete_baby},
    get_baby::{__path_get_baby, get_baby},
    get_family_babies::{__path_get_family_babies, get_family_babies},
    update_baby::{__path_update_baby, update_baby},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_baby, get_baby, update_baby, delete_baby, get_family_babies))]
pub struct BabyApiDoc;

pub fn baby_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/api/babies"), post(create_baby))
        .route(
            &format!("{root_path}/api/babies/{{baby_id}}"),
            get(get_baby).patch(update_baby).delete(delete_baby),
        )
        .route(
            &format!("{root_path}/api/families/{{family_id}}/babies"),
            get(get_family_babies),
        )
}
