use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

pub const LIVENESS_MESSAGE: &str = "Chat relay is running!";

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: LIVENESS_MESSAGE,
    })
}

pub async fn livez() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

pub async fn readyz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
