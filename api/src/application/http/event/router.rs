use axum::{
    Router,
    routing::{get, patch, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_event::{__path_create_event, create_event},
    delete_event::{__path_delete_event, delete_event},
    get_baby_events::{__path_get_baby_events, get_baby_events},
    update_event::{__path_update_event, update_event},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_event, get_baby_events, update_event, delete_event))]
pub struct EventApiDoc;

pub fn event_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/api/events"), post(create_event))
        .route(
            &format!("{root_path}/api/babies/{{baby_id}}/events"),
            get(get_baby_events),
        )
        .route(
            &format!("{root_path}/api/events/{{event_id}}"),
            patch(update_event).delete(delete_event),
        )
}
