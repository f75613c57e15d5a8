//! Outbound client for hosted LLM inference endpoints.

mod error;
mod provider;
mod registry;
mod types;

pub use error::LLMError;
pub use provider::{HuggingFaceProvider, InferenceProvider};
pub use registry::{DEFAULT_BASE_URL, Endpoint, ModelRegistry};
pub use types::{GeneratedText, InferenceRequest};
