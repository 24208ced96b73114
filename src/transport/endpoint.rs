//! Endpoint configuration resolution.

use crate::config::BackendConfig;

/// Resolved backend endpoint for one transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Canonical backend base address; relay composition is applied later.
    pub base_address: String,
    pub timeout_millis: u64,
    pub use_relay: bool,
}

/// Resolve the backend endpoint, optionally marked for relay routing.
pub fn resolve_config(backend: &BackendConfig, use_relay: bool) -> EndpointConfig {
    EndpointConfig {
        base_address: backend.base_url.clone(),
        timeout_millis: backend.timeout_ms,
        use_relay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_canonical_address() {
        let backend = BackendConfig {
            base_url: "https://api.krixo.test".to_string(),
            timeout_ms: 4000,
            system_proxy: true,
        };

        let direct = resolve_config(&backend, false);
        let relayed = resolve_config(&backend, true);

        assert_eq!(direct.base_address, "https://api.krixo.test");
        assert_eq!(relayed.base_address, direct.base_address);
        assert_eq!(relayed.timeout_millis, 4000);
        assert!(relayed.use_relay);
        assert!(!direct.use_relay);
    }
}
