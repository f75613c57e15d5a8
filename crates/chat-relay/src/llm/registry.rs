//! Registry mapping client-facing model keys to inference endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use url::Url;

/// Default root for hosted inference endpoints.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Query pair asking the provider to wait for a cold model to load.
const WAIT_FOR_MODEL: (&str, &str) = ("wait_for_model", "true");

struct ModelSpec {
    key: &'static str,
    repository: &'static str,
    wait_for_model: bool,
}

/// Allow-listed models. Adding a model is one line here.
const MODELS: &[ModelSpec] = &[
    ModelSpec {
        key: "mistral",
        repository: "mistralai/Mistral-7B-Instruct-v0.3",
        wait_for_model: true,
    },
    ModelSpec {
        key: "alpha",
        repository: "HuggingFaceH4/zephyr-7b-alpha",
        wait_for_model: false,
    },
    ModelSpec {
        key: "phi-2",
        repository: "microsoft/phi-2",
        wait_for_model: true,
    },
    ModelSpec {
        key: "phi-1_5",
        repository: "microsoft/phi-1_5",
        wait_for_model: true,
    },
    ModelSpec {
        key: "instruct",
        repository: "tiiuae/falcon-7b-instruct",
        wait_for_model: false,
    },
];

/// A resolved inference endpoint for one model key.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub key: &'static str,
    pub repository: &'static str,
    pub wait_for_model: bool,
    pub url: Url,
}

/// Immutable lookup table from model key to endpoint.
///
/// Built once at startup and shared between requests without locking.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    endpoints: Arc<HashMap<&'static str, Endpoint>>,
}

impl ModelRegistry {
    /// Resolve every allow-listed model against `base_url`.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let base = base_url.trim_end_matches('/');
        let mut endpoints = HashMap::with_capacity(MODELS.len());

        for spec in MODELS {
            let mut url = Url::parse(&format!("{base}/{}", spec.repository))?;
            if spec.wait_for_model {
                url.query_pairs_mut()
                    .append_pair(WAIT_FOR_MODEL.0, WAIT_FOR_MODEL.1);
            }
            debug!(model = spec.key, url = %url, "Registered model endpoint");
            endpoints.insert(
                spec.key,
                Endpoint {
                    key: spec.key,
                    repository: spec.repository,
                    wait_for_model: spec.wait_for_model,
                    url,
                },
            );
        }

        Ok(Self {
            endpoints: Arc::new(endpoints),
        })
    }

    /// Look up the endpoint for a model key.
    pub fn resolve(&self, key: &str) -> Option<&Endpoint> {
        self.endpoints.get(key)
    }

    /// Allow-listed model keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        MODELS.iter().map(|spec| spec.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ModelRegistry {
        ModelRegistry::new(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_registry_contains_allow_list() {
        let registry = registry();
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, ["mistral", "alpha", "phi-2", "phi-1_5", "instruct"]);
        for key in keys {
            assert!(registry.resolve(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_resolve_exact_urls() {
        let registry = registry();
        let cases = [
            (
                "mistral",
                "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.3?wait_for_model=true",
            ),
            (
                "alpha",
                "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-alpha",
            ),
            (
                "phi-2",
                "https://api-inference.huggingface.co/models/microsoft/phi-2?wait_for_model=true",
            ),
            (
                "phi-1_5",
                "https://api-inference.huggingface.co/models/microsoft/phi-1_5?wait_for_model=true",
            ),
            (
                "instruct",
                "https://api-inference.huggingface.co/models/tiiuae/falcon-7b-instruct",
            ),
        ];

        for (key, expected) in cases {
            assert_eq!(registry.resolve(key).unwrap().url.as_str(), expected);
        }
    }

    #[test]
    fn test_wait_directive_only_for_warmup_subset() {
        let registry = registry();
        for key in registry.keys() {
            let endpoint = registry.resolve(key).unwrap();
            let has_directive = endpoint.url.query() == Some("wait_for_model=true");
            let expected = matches!(key, "mistral" | "phi-2" | "phi-1_5");
            assert_eq!(has_directive, expected, "key {key}");
            assert_eq!(endpoint.wait_for_model, expected);
        }
    }

    #[test]
    fn test_resolve_unknown_key() {
        let registry = registry();
        assert!(registry.resolve("gpt-4").is_none());
        assert!(registry.resolve("").is_none());
        assert!(registry.resolve("Mistral").is_none());
    }

    #[test]
    fn test_custom_base_url_trailing_slash() {
        let registry = ModelRegistry::new("http://127.0.0.1:9000/models/").unwrap();
        assert_eq!(
            registry.resolve("phi-2").unwrap().url.as_str(),
            "http://127.0.0.1:9000/models/microsoft/phi-2?wait_for_model=true"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ModelRegistry::new("not a url").is_err());
    }
}
