use axum::extract::{Query, State};
use firstbites_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientRepository, value_objects::ListIngredientsFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::query_params::PaginationParams;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetIngredientsQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub items: Vec<Ingredient>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "List ingredients",
    description = "Paginated catalog, optionally narrowed to one category.",
    params(GetIngredientsQuery),
    responses(
        (status = 200, body = GetIngredientsResponse)
    )
)]
pub async fn get_ingredients(
    Query(query): Query<GetIngredientsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let pagination = PaginationParams::new(query.page, query.page_size);

    let (items, total) = state
        .ingredient_repository
        .list(ListIngredientsFilter {
            page: pagination.page,
            page_size: pagination.page_size,
            category: query.category,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientsResponse {
        items,
        total,
        page: pagination.page,
        page_size: pagination.page_size,
    }))
}
