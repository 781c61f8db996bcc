use axum::{
    Router,
    routing::{get, patch, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_recipe::{__path_create_recipe, create_recipe},
    create_recipe_item::{__path_create_recipe_item, create_recipe_item},
    delete_recipe::{__path_delete_recipe, delete_recipe},
    delete_recipe_item::{__path_delete_recipe_item, delete_recipe_item},
    get_baby_recipes::{__path_get_baby_recipes, get_baby_recipes},
    get_recipe_by_date::{__path_get_recipe_by_date, get_recipe_by_date},
    get_recipe_items::{__path_get_recipe_items, get_recipe_items},
    update_recipe::{__path_update_recipe, update_recipe},
    update_recipe_item::{__path_update_recipe_item, update_recipe_item},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    create_recipe,
    get_recipe_by_date,
    get_baby_recipes,
    update_recipe,
    delete_recipe,
    create_recipe_item,
    get_recipe_items,
    update_recipe_item,
    delete_recipe_item
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/api/recipes"),
            post(create_recipe).get(get_recipe_by_date),
        )
        .route(
            &format!("{root_path}/api/babies/{{baby_id}}/recipes"),
            get(get_baby_recipes),
        )
        .route(
            &format!("{root_path}/api/recipes/{{recipe_id}}"),
            patch(update_recipe).delete(delete_recipe),
        )
        .route(
            &format!("{root_path}/api/recipes/{{recipe_id}}/items"),
            post(create_recipe_item).get(get_recipe_items),
        )
        .route(
            &format!("{root_path}/api/recipe-items/{{item_id}}"),
            patch(update_recipe_item).delete(delete_recipe_item),
        )
}
