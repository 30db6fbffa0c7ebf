use std::collections::HashSet;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/shopcart/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("shopcart").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The stock has at least one product and no duplicate names
    /// - The client server URL is a ws:// or wss:// URL
    /// - The relay bind address is a socket address
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stock.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one stock product must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.stock.iter().find(|p| !seen.insert(p.name.as_str())) {
            return Err(ConfigError::ValidationError {
                message: format!("Stock product '{}' is listed more than once", dup.name),
            });
        }

        let url = Url::parse(&self.client.server_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid server URL '{}': {}", self.client.server_url, e),
        })?;
        if !matches!(url.scheme(), "ws" | "wss") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Server URL '{}' must use ws:// or wss://",
                    self.client.server_url
                ),
            });
        }

        self.relay
            .bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ValidationError {
                message: format!("Invalid relay bind address '{}': {}", self.relay.bind_addr, e),
            })?;

        Ok(())
    }
}
