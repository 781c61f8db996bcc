use axum::{
    Router,
    routing::{get, patch},
};
use utoipa::OpenApi;

use super::handlers::{
    create_food_trial::{__path_create_food_trial, create_food_trial},
    delete_food_trial::{__path_delete_food_trial, delete_food_trial},
    get_baby_food_trials::{__path_get_baby_food_trials, get_baby_food_trials},
    update_food_trial::{__path_update_food_trial, update_food_trial},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    create_food_trial,
    get_baby_food_trials,
    update_food_trial,
    delete_food_trial
))]
pub struct FoodTrialApiDoc;

pub fn food_trial_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/api/babies/{{baby_id}}/food-trials"),
            get(get_baby_food_trials).post(create_food_trial),
        )
        .route(
            &format!("{root_path}/api/food-trials/{{trial_id}}"),
            patch(update_food_trial).delete(delete_food_trial),
        )
}
