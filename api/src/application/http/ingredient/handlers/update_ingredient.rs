use axum::extract::{Path, State};
use firstbites_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientRepository, value_objects::UpdateIngredientInput,
};

use crate::application::http::ingredient::validators::{RISK_LEVELS, UpdateIngredientValidator};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    patch,
    path = "/{ingredient_id}",
    tag = "ingredient",
    summary = "Update ingredient",
    description = "Applies only the fields present in the payload and refreshes updated_at.",
    params(
        ("ingredient_id" = String, Path, description = "Ingredient ID"),
    ),
    request_body = UpdateIngredientValidator,
    responses(
        (status = 200, body = Ingredient),
        (status = 400, description = "Invalid risk level"),
        (status = 404, description = "Ingredient not found")
    )
)]
pub async fn update_ingredient(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateIngredientValidator>,
) -> Result<Response<Ingredient>, ApiError> {
    if let Some(risk_level) = &payload.risk_level {
        if !RISK_LEVELS.contains(&risk_level.as_str()) {
            return Err(ApiError::BadRequest(
                "risk_level must be one of low, medium, high".to_string(),
            ));
        }
    }

    let updated = state
        .ingredient_repository
        .update(
            &ingredient_id,
            UpdateIngredientInput {
                name: payload.name,
                category: payload.category,
                image_url: payload.image_url,
                risk_level: payload.risk_level,
                nutrients: payload.nutrients,
                summary: payload.summary,
                description: payload.description,
                suitable_month_from: payload.suitable_month_from,
                suitable_month_to: payload.suitable_month_to,
            },
        )
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("ingredient not found".to_string()))?;

    Ok(Response::OK(updated))
}
