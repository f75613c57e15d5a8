//! LLM error types.

use thiserror::Error;

/// Errors that can occur when calling an inference endpoint.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request failed
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// API returned success but the body was not a generation result
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl LLMError {
    /// Whether the outbound request gave up waiting on the provider.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LLMError::Request(e) if e.is_timeout())
    }
}
