use poem::http::{Method, StatusCode};
use poem::{Response, handler};

use crate::api::error::{StatusResponse, error_response, json_response};

/// Health check endpoint
///
/// `GET` answers `{"status":"OK"}`; any other method is rejected with 405.
#[handler]
pub fn health_check(method: Method) -> Response {
    if method != Method::GET {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
    }

    json_response(StatusCode::OK, &StatusResponse::ok())
}
