//! JSON error responses.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn error(status: StatusCode, detail: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

pub fn bad_request(detail: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    error(StatusCode::BAD_REQUEST, detail)
}
