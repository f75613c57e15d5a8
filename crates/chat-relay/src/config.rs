use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use serde::Deserialize;
use thiserror::Error;

use crate::llm::DEFAULT_BASE_URL;

// ============================================================================
// Config (root)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Ok(serde_saphyr::from_str(&contents)?)
    }
}

// ============================================================================
// ServerConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout() -> u64 {
    300
}

// ============================================================================
// ProviderConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the environment variable holding the bearer token.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Outbound request timeout. Unset leaves the HTTP client default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_seconds: None,
        }
    }
}

impl ProviderConfig {
    /// Read the credential from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    "HF_API_KEY".to_string()
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_saphyr::Error),
}

// ============================================================================
// Tests
// ============================================================================
