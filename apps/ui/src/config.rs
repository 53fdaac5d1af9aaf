//! UI configuration, loaded from environment variables.
//!
//! - `INVENTORY_API_URL` - products endpoint (default `http://localhost:5000/products`)
//! - `INVENTORY_HTTP_TIMEOUT_SECS` - per-request timeout (default 30)

use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/products";

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl UiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("INVENTORY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("INVENTORY_API_URL".to_string()));
        }

        let timeout_secs: u64 = lookup("INVENTORY_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("INVENTORY_HTTP_TIMEOUT_SECS".to_string()))?;

        Ok(UiConfig {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
