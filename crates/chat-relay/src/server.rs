use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;
use crate::handlers;
use crate::llm::{InferenceProvider, ModelRegistry};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub models: ModelRegistry,
    pub provider: Arc<dyn InferenceProvider>,
    /// Deadline for a single outbound generation.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(
        models: ModelRegistry,
        provider: Arc<dyn InferenceProvider>,
        config: &ServerConfig,
    ) -> Self {
        Self {
            models,
            provider,
            request_timeout: Duration::from_secs(config.request_timeout_seconds),
        }
    }
}

pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .route("/chat", post(handlers::chat))
        .with_state(state)
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Permissive unless specific origins are configured.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
