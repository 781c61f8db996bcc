use axum::extract::State;
use firstbites_core::domain::counter::{entities::Counter, ports::CounterRepository};

use crate::application::http::counter::validators::UpdateCountValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

// The cloud template's healthcheck page only ever touches row 1.
const COUNTER_ID: i32 = 1;

#[utoipa::path(
    post,
    path = "/count",
    tag = "counter",
    summary = "Bump or clear the demo counter",
    description = "`inc` upserts the singleton row and returns the new count; `clear` drops it.",
    request_body = UpdateCountValidator,
    responses(
        (status = 200, body = i32),
        (status = 400, description = "Unknown action")
    )
)]
pub async fn update_count(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateCountValidator>,
) -> Result<Response<serde_json::Value>, ApiError> {
    match payload.action.as_str() {
        "inc" => {
            let existing = state
                .counter_repository
                .get(COUNTER_ID)
                .await
                .map_err(ApiError::from)?;

            let counter = match existing {
                Some(mut counter) => {
                    counter.increment();
                    state
                        .counter_repository
                        .update(counter)
                        .await
                        .map_err(ApiError::from)?
                }
                None => state
                    .counter_repository
                    .create(Counter::new(COUNTER_ID))
                    .await
                    .map_err(ApiError::from)?,
            };

            Ok(Response::OK(serde_json::json!(counter.count)))
        }
        "clear" => {
            // Clearing an absent counter still succeeds.
            state
                .counter_repository
                .delete(COUNTER_ID)
                .await
                .map_err(ApiError::from)?;

            Ok(Response::empty())
        }
        _ => Err(ApiError::BadRequest(
            "action must be one of inc, clear".to_string(),
        )),
    }
}
