use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use firstbites_core::domain::common::entities::app_errors::CoreError;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Error envelope, `{"code": -1, "errorMsg": <message>}`, carried on a
/// real HTTP status instead of the legacy blanket 200.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = json!({ "code": -1, "errorMsg": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("record not found".to_string()),
            CoreError::FamilyNotFound => ApiError::NotFound("family not found".to_string()),
            CoreError::InvalidDate(_) => ApiError::BadRequest(error.to_string()),
            CoreError::Storage(_) => {
                ApiError::InternalServerError("storage operation failed".to_string())
            }
            CoreError::WechatTimeout | CoreError::WechatRequest(_) => {
                ApiError::BadGateway(error.to_string())
            }
            CoreError::WechatRejected { .. } => ApiError::BadGateway(error.to_string()),
        }
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let detail = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field}: {detail}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Json extractor that also runs the `validator` rules, turning both
/// malformed bodies and rule violations into 400 envelopes.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(validation_message(&e)))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_not_found_maps_to_404() {
        let error = ApiError::from(CoreError::NotFound);
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_faults_map_to_500_without_detail() {
        let error = ApiError::from(CoreError::Storage("connection reset".to_string()));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.to_string().contains("connection reset"));
    }

    #[test]
    fn wechat_failures_map_to_502() {
        for error in [
            CoreError::WechatTimeout,
            CoreError::WechatRequest("dns".to_string()),
            CoreError::WechatRejected {
                errcode: 40029,
                errmsg: "invalid code".to_string(),
            },
        ] {
            assert_eq!(ApiError::from(error).status(), StatusCode::BAD_GATEWAY);
        }
    }
}
