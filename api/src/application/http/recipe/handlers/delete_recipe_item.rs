use axum::extract::{Path, State};
use firstbites_core::domain::recipe::ports::RecipeItemRepository;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/recipe-items/{item_id}",
    tag = "recipe",
    summary = "Delete recipe item",
    params(
        ("item_id" = String, Path, description = "Recipe item ID"),
    ),
    responses(
        (status = 200, description = "Recipe item deleted"),
        (status = 404, description = "Recipe item not found")
    )
)]
pub async fn delete_recipe_item(
    Path(item_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let deleted = state
        .recipe_item_repository
        .delete(&item_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("recipe item not found".to_string()));
    }

    Ok(Response::empty())
}
