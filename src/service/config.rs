//! Configuration for the SNP scoring web service

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;

/// Default environment variable holding the external model API key
pub const DEFAULT_API_KEY_ENV: &str = "ALPHAGENOME_API_KEY";

/// Main service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Prediction model configuration
    #[serde(default)]
    pub model: ModelConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to listen on (default: 5000)
    pub port: u16,
    /// Maximum request size (default: "10MB")
    pub max_request_size: String,
    /// Enable CORS (default: true)
    pub enable_cors: bool,
    /// Enable request tracing (default: true)
    pub enable_tracing: bool,
    /// Maximum SNP records per analyze request (default: 10000)
    pub max_batch_size: usize,
}

/// Prediction model configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Environment variable that holds the external model API key
    pub api_key_env: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_request_size: "10MB".to_string(),
            enable_cors: true,
            enable_tracing: true,
            max_batch_size: 10_000,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl ModelConfig {
    /// Whether an external model API key is set (the value itself is never read out)
    pub fn api_key_present(&self) -> bool {
        std::env::var_os(&self.api_key_env).is_some_and(|v| !v.is_empty())
    }
}

impl ServiceConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Err(e) = super::server::parse_size(&self.server.max_request_size) {
            return Err(format!("Invalid max_request_size: {}", e));
        }

        if self.server.max_batch_size == 0 {
            return Err("max_batch_size must be greater than 0".to_string());
        }

        if self.model.api_key_env.trim().is_empty() {
            return Err("model.api_key_env must not be empty".to_string());
        }

        Ok(())
    }
}
