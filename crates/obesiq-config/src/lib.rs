//! Configuration loading for obesiq.
//! Reads obesiq.toml from the path in OBESIQ_CONFIG or the current
//! directory; a missing file falls back to full defaults so the dashboard
//! can start against the mock classifier.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,
    #[serde(default = "default_weights_path")]
    pub weights_path: String,
    #[serde(default)]
    pub use_gpu: bool,
    /// Serve predictions from the deterministic mock classifier when the
    /// artifact cannot be loaded. Meant for development only.
    #[serde(default)]
    pub mock_fallback: bool,
}

fn default_manifest_path() -> String { "models/classifier.json".to_string() }
fn default_weights_path() -> String { "models/classifier.safetensors".to_string() }

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            weights_path: default_weights_path(),
            use_gpu: false,
            mock_fallback: false,
        }
    }
}


impl Config {
    /// Load configuration from obesiq.toml.
    /// Checks OBESIQ_CONFIG first, then the current directory. A missing
    /// file is not an error; a malformed one is.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("OBESIQ_CONFIG").unwrap_or_else(|_| "obesiq.toml".to_string());

        if !Path::new(&path).exists() {
            tracing::info!(path, "no config file found, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
