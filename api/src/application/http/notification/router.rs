use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_notification::{__path_create_notification, create_notification},
    delete_notification::{__path_delete_notification, delete_notification},
    get_user_notifications::{__path_get_user_notifications, get_user_notifications},
    mark_all_notifications_read::{
        __path_mark_all_notifications_read, mark_all_notifications_read,
    },
    mark_notification_read::{__path_mark_notification_read, mark_notification_read},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    create_notification,
    get_user_notifications,
    mark_all_notifications_read,
    mark_notification_read,
    delete_notification
))]
pub struct NotificationApiDoc;

pub fn notification_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/api/notifications"),
            post(create_notification),
        )
        .route(
            &format!("{root_path}/api/users/{{user_id}}/notifications"),
            get(get_user_notifications),
        )
        .route(
            &format!("{root_path}/api/users/{{user_id}}/notifications/read-all"),
            patch(mark_all_notifications_read),
        )
        .route(
            &format!("{root_path}/api/notifications/{{notification_id}}/read"),
            patch(mark_notification_read),
        )
        .route(
            &format!("{root_path}/api/notifications/{{notification_id}}"),
            delete(delete_notification),
        )
}
