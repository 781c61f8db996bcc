use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_member::{__path_add_member, add_member},
    create_family::{__path_create_family, create_family},
    delete_family::{__path_delete_family, delete_family},
    get_family::{__path_get_family, get_family},
    get_members::{__path_get_members, get_members},
    get_user_families::{__path_get_user_families, get_user_families},
    remove_member::{__path_remove_member, remove_member},
    update_family::{__path_update_family, update_family},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    create_family,
    get_family,
    update_family,
    delete_family,
    add_member,
    get_members,
    remove_member,
    get_user_families
))]
pub struct FamilyApiDoc;

pub fn family_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/api/families"), post(create_family))
        .route(
            &format!("{root_path}/api/families/{{family_id}}"),
            get(get_family).patch(update_family).delete(delete_family),
        )
        .route(
            &format!("{root_path}/api/families/{{family_id}}/members"),
            post(add_member).get(get_members),
        )
        .route(
            &format!("{root_path}/api/families/{{family_id}}/members/{{user_id}}"),
            delete(remove_member),
        )
        .route(
            &format!("{root_path}/api/users/{{user_id}}/families"),
            get(get_user_families),
        )
}
