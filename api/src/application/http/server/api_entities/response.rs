use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::json;

/// Success envelope, `{"code": 0, "data": <payload>}`. The wire shape
/// is the one the mini-program clients already parse.
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl Response<serde_json::Value> {
    /// Empty-success, `{"code": 0, "data": {}}`.
    pub fn empty() -> Self {
        Response::OK(json!({}))
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        let (status, data) = match self {
            Response::OK(data) => (StatusCode::OK, data),
            Response::Created(data) => (StatusCode::CREATED, data),
        };

        (status, Json(json!({ "code": 0, "data": data }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_wraps_payload_in_envelope() {
        let response = Response::OK(json!({"id": "abc"})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn created_reports_201() {
        let response = Response::Created(json!({})).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
