use axum::extract::State;
use firstbites_core::domain::ingredient::{
    entities::{Ingredient, IngredientConfig},
    ports::IngredientRepository,
};

use crate::application::http::ingredient::validators::{CreateIngredientValidator, RISK_LEVELS};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "ingredient",
    summary = "Create ingredient",
    description = "Adds an entry to the shared catalog.",
    request_body = CreateIngredientValidator,
    responses(
        (status = 201, body = Ingredient),
        (status = 400, description = "Missing field or invalid risk level")
    )
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateIngredientValidator>,
) -> Result<Response<Ingredient>, ApiError> {
    let risk_level = payload.risk_level.unwrap_or_else(|| "low".to_string());
    if !RISK_LEVELS.contains(&risk_level.as_str()) {
        return Err(ApiError::BadRequest(
            "risk_level must be one of low, medium, high".to_string(),
        ));
    }

    let ingredient = Ingredient::new(IngredientConfig {
        name: payload.name,
        category: payload.category,
        image_url: payload.image_url.unwrap_or_default(),
        risk_level,
        nutrients: payload.nutrients.unwrap_or_else(|| serde_json::json!({})),
        summary: payload.summary.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        suitable_month_from: payload.suitable_month_from.unwrap_or(6),
        suitable_month_to: payload.suitable_month_to.unwrap_or(36),
    });

    let created = state
        .ingredient_repository
        .create(ingredient)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(created))
}
