//! Inference provider trait and the hosted-endpoint implementation.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::LLMError;
use super::registry::Endpoint;
use super::types::{GeneratedText, InferenceRequest};

/// Trait for backends that turn user text into generated text.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Run a single text-generation request against `endpoint`.
    async fn generate(&self, endpoint: &Endpoint, inputs: &str) -> Result<String, LLMError>;
}

/// Provider for hosted text-generation endpoints (`POST {"inputs": ...}`).
pub struct HuggingFaceProvider {
    client: Client,
    api_key: Option<String>,
}

impl HuggingFaceProvider {
    #[must_use]
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl InferenceProvider for HuggingFaceProvider {
    async fn generate(&self, endpoint: &Endpoint, inputs: &str) -> Result<String, LLMError> {
        debug!(
            model = endpoint.key,
            repository = endpoint.repository,
            url = %endpoint.url,
            "Dispatching inference request"
        );

        let mut req = self
            .client
            .post(endpoint.url.clone())
            .header("Content-Type", "application/json");

        if let Some(ref key) = self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let response = req.json(&InferenceRequest { inputs }).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LLMError::Api { status, message });
        }

        let body = response.bytes().await?;
        first_generation(&body)
    }
}

/// Extract the first `generated_text` from a response body.
fn first_generation(body: &[u8]) -> Result<String, LLMError> {
    let generations: Vec<GeneratedText> = serde_json::from_slice(body)
        .map_err(|e| LLMError::MalformedResponse(e.to_string()))?;

    generations
        .into_iter()
        .next()
        .map(|g| g.generated_text)
        .ok_or_else(|| LLMError::MalformedResponse("empty generation list".to_string()))
}
