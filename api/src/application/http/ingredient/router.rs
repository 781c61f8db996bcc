use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    create_ingredient::{__path_create_ingredient, create_ingredient},
    delete_ingredient::{__path_delete_ingredient, delete_ingredient},
    get_ingredient::{__path_get_ingredient, get_ingredient},
    get_ingredients::{__path_get_ingredients, get_ingredients},
    update_ingredient::{__path_update_ingredient, update_ingredient},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_ingredients,
    get_ingredient,
    create_ingredient,
    update_ingredient,
    delete_ingredient
))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/api/ingredients"),
            get(get_ingredients).post(create_ingredient),
        )
        .route(
            &format!("{root_path}/api/ingredients/{{ingredient_id}}"),
            get(get_ingredient)
                .patch(update_ingredient)
                .delete(delete_ingredient),
        )
}
