use serde::{Deserialize, Serialize};

use crate::cart::{default_stock, Product};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    /// Products offered to the shopper, in display order.
    #[serde(default = "default_stock")]
    pub stock: Vec<Product>,
}

/// Settings for the shop front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Relay endpoint, `ws://` or `wss://` (default: ws://127.0.0.1:9000).
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

/// Settings for the relay server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Bind address (host:port) for the relay listener.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_server_url() -> String {
    "ws://127.0.0.1:9000".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:9000".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            relay: RelayConfig::default(),
            stock: default_stock(),
        }
    }
}
