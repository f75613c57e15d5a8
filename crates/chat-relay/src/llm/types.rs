//! Wire types for the hosted inference API.

use serde::{Deserialize, Serialize};

/// Body of a text-generation request.
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
}

/// One element of a text-generation response array.
#[derive(Debug, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}
