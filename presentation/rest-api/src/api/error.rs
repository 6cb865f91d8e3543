use poem::web::Json;
use poem::{IntoResponse, Response};
use poem::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Body of every failed response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body of successful responses that carry no entity: `{"status":"OK"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    /// `context` is the human-readable prefix placed before the cause.
    fn into_error_response(self, context: &str) -> (StatusCode, ErrorResponse);
}

/// Answers `body` as a JSON payload with the given status.
pub fn json_response<T: Serialize + Sync>(status: StatusCode, body: &T) -> Response {
    Json(body).with_status(status).into_response()
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    json_response(status, &ErrorResponse::new(error))
}
