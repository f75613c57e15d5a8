//! Chat forwarding handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm::LLMError;
use crate::response;
use crate::server::AppState;

const INVALID_MODEL: &str = "Invalid model selection";
const FETCH_FAILED: &str = "Failed to fetch response from LLM";
const MALFORMED: &str = "Malformed response from LLM";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub user_message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /chat
///
/// The outbound call is bounded by the server's request timeout; hitting it
/// is reported as a gateway timeout.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return response::error(rejection.status(), rejection.body_text()).into_response();
        }
    };

    let Some(endpoint) = state.models.resolve(&req.model) else {
        return response::bad_request(INVALID_MODEL).into_response();
    };

    let generation = state.provider.generate(endpoint, &req.user_message);
    match tokio::time::timeout(state.request_timeout, generation).await {
        Ok(Ok(text)) => (StatusCode::OK, Json(ChatResponse { response: text })).into_response(),
        Ok(Err(e)) => {
            warn!(model = endpoint.key, error = %e, "LLM request failed");
            let (status, detail) = failure_status(&e);
            response::error(status, detail).into_response()
        }
        Err(_) => {
            warn!(
                model = endpoint.key,
                timeout_secs = state.request_timeout.as_secs(),
                "LLM request exceeded request timeout"
            );
            response::error(StatusCode::GATEWAY_TIMEOUT, FETCH_FAILED).into_response()
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Map a provider failure to the caller-facing status and detail.
///
/// Provider statuses pass through; transport failures become gateway errors.
fn failure_status(err: &LLMError) -> (StatusCode, &'static str) {
    match err {
        LLMError::Api { status, .. } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            FETCH_FAILED,
        ),
        LLMError::Request(_) if err.is_timeout() => (StatusCode::GATEWAY_TIMEOUT, FETCH_FAILED),
        LLMError::Request(_) => (StatusCode::BAD_GATEWAY, FETCH_FAILED),
        LLMError::MalformedResponse(_) => (StatusCode::BAD_GATEWAY, MALFORMED),
    }
}
