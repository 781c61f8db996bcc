use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_count::{__path_get_count, get_count},
    update_count::{__path_update_count, update_count},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_count, update_count))]
pub struct CounterApiDoc;

pub fn counter_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new().route(
        &format!("{root_path}/api/count"),
        get(get_count).post(update_count),
    )
}
