//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `INVENTORY_HOST` | `0.0.0.0` |
//! | `INVENTORY_PORT` | `5000` |
//! | `INVENTORY_DB_PATH` | `<data dir>/inventory.db` |
//! | `INVENTORY_DB_MAX_CONNECTIONS` | `1` |
//! | `INVENTORY_DB_CREATE_SCHEMA` | `true` |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use directories::ProjectDirs;
use inventory_db::DbConfig;
use serde::{Deserialize, Serialize};

const DB_FILE_NAME: &str = "inventory.db";

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool size; 1 means one shared connection
    pub db_max_connections: u32,

    /// Create the products table on startup if missing
    pub create_schema: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            host: lookup("INVENTORY_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("INVENTORY_PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("INVENTORY_PORT".to_string()))?,

            database_path: lookup("INVENTORY_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_database_path),

            db_max_connections: lookup("INVENTORY_DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "1".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("INVENTORY_DB_MAX_CONNECTIONS".to_string()))?,

            create_schema: parse_bool(
                "INVENTORY_DB_CREATE_SCHEMA",
                lookup("INVENTORY_DB_CREATE_SCHEMA"),
                true,
            )?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "INVENTORY_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("INVENTORY_HOST".to_string()))
    }

    /// Store configuration derived from this config.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .create_schema(self.create_schema)
    }
}

/// Platform data directory, or the working directory if none is known.
///
/// - **macOS**: `~/Library/Application Support/com.inventory.inventory/`
/// - **Linux**: `~/.local/share/inventory/`
/// - **Windows**: `%APPDATA%\inventory\inventory\data\`
fn default_database_path() -> PathBuf {
    ProjectDirs::from("com", "inventory", "inventory")
        .map(|dirs| dirs.data_dir().join(DB_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DB_FILE_NAME))
}

fn parse_bool(key: &str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("no") => Ok(false),
        Some(_) => Err(ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.db_max_connections, 1);
        assert!(config.create_schema);
        assert!(config.database_path.ends_with(DB_FILE_NAME));
        assert_eq!(config.bind_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("INVENTORY_PORT", "8080"),
            ("INVENTORY_HOST", "127.0.0.1"),
            ("INVENTORY_DB_PATH", "/tmp/shop.db"),
            ("INVENTORY_DB_CREATE_SCHEMA", "false"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_path, PathBuf::from("/tmp/shop.db"));
        assert!(!config.db_config().create_schema);
    }

    #[test]
    fn test_invalid_values() {
        let err = ApiConfig::from_lookup(lookup(&[("INVENTORY_PORT", "abc")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for INVENTORY_PORT");

        assert!(ApiConfig::from_lookup(lookup(&[("INVENTORY_DB_MAX_CONNECTIONS", "0")])).is_err());
        assert!(ApiConfig::from_lookup(lookup(&[("INVENTORY_DB_CREATE_SCHEMA", "maybe")])).is_err());
    }
}
