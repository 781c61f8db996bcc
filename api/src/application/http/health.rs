use axum::Router;
use axum::routing::get;

use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

async fn health() -> Response<serde_json::Value> {
    Response::empty()
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}
