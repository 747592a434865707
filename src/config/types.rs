use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Local-to-remote synchronization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Quiet period before a local change is written remotely (default: 500).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Which backend the store talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// In-memory repository behind a fixed artificial delay.
    #[default]
    Simulated,
    /// A counter server reached over HTTP.
    Http,
}

/// Counter backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub kind: ServiceKind,
    /// Delay of every simulated call in milliseconds (default: 1000).
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    /// Base URL of the counter server, used when `kind = "http"`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent to the counter server.
    #[serde(default)]
    pub token: Option<String>,
    /// Client-side request timeout in milliseconds; 0 disables (default: 5000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Counter HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the counter API (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Artificial latency added to counter routes in milliseconds (default: 0).
    #[serde(default)]
    pub latency_ms: u64,
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_simulated_delay_ms() -> u64 {
    1000
}

fn default_base_url() -> String {
    "http://127.0.0.1:8787".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_bind_addr() -> String {
    "127.0.0.1:8787".to_string()
}

impl SyncConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl ServiceConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

impl ServerConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            kind: ServiceKind::default(),
            simulated_delay_ms: default_simulated_delay_ms(),
            base_url: default_base_url(),
            token: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            latency_ms: 0,
        }
    }
}
