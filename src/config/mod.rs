//! Configuration management for the bitcoin.de client.
//!
//! Loads settings from environment variables and config files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API key issued by the exchange
    #[serde(default)]
    pub api_key: String,
    /// Shared secret used for request signing
    #[serde(default)]
    pub secret: String,
    /// API endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Verify the server's TLS certificate
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
    /// Trading API version
    #[serde(default = "default_api_version")]
    pub api_version: u32,
}

fn default_base_url() -> String {
    "https://api.bitcoin.de/".to_string()
}

fn default_verify_tls() -> bool {
    true
}

fn default_api_version() -> u32 {
    1
}

impl Config {
    /// Load configuration from environment variables and config files.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::default().separator("__").prefix("BTCDE"))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.api_key.is_empty(), "api_key must be set");
        anyhow::ensure!(!self.secret.is_empty(), "secret must be set");
        anyhow::ensure!(
            self.base_url.starts_with("http://") || self.base_url.starts_with("https://"),
            "base_url must be an http(s) URL"
        );
        anyhow::ensure!(self.api_version >= 1, "api_version must be >= 1");

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            secret: String::new(),
            base_url: default_base_url(),
            verify_tls: default_verify_tls(),
            api_version: default_api_version(),
        }
    }
}
