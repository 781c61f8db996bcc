use axum::extract::{Path, State};
use firstbites_core::domain::baby::{
    entities::Baby, ports::BabyRepository, value_objects::UpdateBabyInput,
};
use firstbites_core::domain::common::parse_date;

use crate::application::http::baby::validators::UpdateBabyValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    patch,
    path = "/babies/{baby_id}",
    tag = "baby",
    summary = "Update baby",
    description = "Applies only the fields present in the payload.",
    params(
        ("baby_id" = String, Path, description = "Baby ID"),
    ),
    request_body = UpdateBabyValidator,
    responses(
        (status = 200, body = Baby),
        (status = 400, description = "Malformed date or invalid gender"),
        (status = 404, description = "Baby not found")
    )
)]
pub async fn update_baby(
    Path(baby_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateBabyValidator>,
) -> Result<Response<Baby>, ApiError> {
    if let Some(gender) = &payload.gender {
        if gender != "M" && gender != "F" {
            return Err(ApiError::BadRequest("gender must be one of M, F".to_string()));
        }
    }

    let birth_date = payload
        .birth_date
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(ApiError::from)?;

    let updated = state
        .baby_repository
        .update(
            &baby_id,
            UpdateBabyInput {
                nickname: payload.nickname,
                gender: payload.gender,
                birth_date,
                avatar_url: payload.avatar_url,
                avoid_ingredients: payload.avoid_ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("baby not found".to_string()))?;

    Ok(Response::OK(updated))
}
