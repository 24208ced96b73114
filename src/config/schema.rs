//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::transport::relay::{RelayAddress, RelayKind};

/// Root configuration for the API client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend API location and timeout.
    pub backend: BackendConfig,

    /// Relay fallback settings.
    pub relay: RelayConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Backend API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Canonical base URL of the backend (e.g., "https://api.example.com/api").
    pub base_url: String,

    /// Per-attempt network timeout in milliseconds.
    pub timeout_ms: u64,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 10_000,
            system_proxy: true,
        }
    }
}

/// Relay (CORS proxy) fallback configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Fall back to relays when the direct call fails.
    pub enabled: bool,

    /// Value sent in the `Origin` header on relay-routed requests.
    pub origin: String,

    /// Maximum number of relays tried per operation (all when unset).
    pub max_attempts: Option<usize>,

    /// Relays in the order they are tried.
    pub proxies: Vec<RelayAddress>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            origin: "http://localhost:3000".to_string(),
            max_attempts: None,
            proxies: default_proxies(),
        }
    }
}

fn default_proxies() -> Vec<RelayAddress> {
    vec![
        RelayAddress::new(RelayKind::PrefixSlash, "https://cors-anywhere.herokuapp.com"),
        RelayAddress::new(RelayKind::QueryEncode, "https://api.allorigins.win/raw?url="),
        RelayAddress::new(RelayKind::PrefixSlash, "https://thingproxy.freeboard.io/fetch/"),
        RelayAddress::new(RelayKind::PrefixConcat, "https://corsproxy.io/?"),
        RelayAddress::new(RelayKind::PrefixConcat, "https://cors.bridged.cc/"),
    ]
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
