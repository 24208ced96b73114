//! Transport construction.
//!
//! # Responsibilities
//! - Compose the final base address (direct, or through one relay)
//! - Fix per-transport headers and timeout
//! - Attach the interceptor chain once, at construction
//! - Execute JSON requests and map failures onto [`ClientError`]

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::config::{BackendConfig, ClientConfig, RelayConfig};
use crate::http::InterceptorChain;
use crate::resilience::FallbackChain;
use crate::transport::endpoint::resolve_config;
use crate::transport::types::{ClientError, ClientResult, TransportConfig};

const JSON: &str = "application/json";

/// An HTTP client bound to one base address.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    config: TransportConfig,
    label: String,
    client: Client,
    interceptors: InterceptorChain,
}

impl Transport {
    fn new(
        config: TransportConfig,
        label: String,
        system_proxy: bool,
        interceptors: InterceptorChain,
    ) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::Configuration(format!("invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::Configuration(format!("invalid value for header '{}': {}", name, e)))?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.timeout_millis))
            .default_headers(headers);
        if !system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            label,
            client,
            interceptors,
        })
    }

    /// Value description of this transport.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    pub fn base_address(&self) -> &str {
        &self.config.base_address
    }

    pub async fn get(&self, path: &str) -> ClientResult<Value> {
        let request = self.client.get(self.config.url_for(path));
        self.execute(Method::GET, path, request).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let request = self.client.post(self.config.url_for(path)).json(body);
        self.execute(Method::POST, path, request).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let request = self.client.put(self.config.url_for(path)).json(body);
        self.execute(Method::PUT, path, request).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<Value> {
        let request = self.client.delete(self.config.url_for(path));
        self.execute(Method::DELETE, path, request).await
    }

    async fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> ClientResult<Value> {
        let request = self.interceptors.on_request(request);
        tracing::debug!(transport = %self.label, %method, path, "Dispatching request");

        self.dispatch(request)
            .await
            .map_err(|e| self.interceptors.on_error(e))
    }

    async fn dispatch(&self, request: RequestBuilder) -> ClientResult<Value> {
        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with(JSON))
            .unwrap_or(false);
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(value),
            Err(e) if is_json => Err(ClientError::Decode(e.to_string())),
            Err(_) => Ok(Value::String(text)),
        }
    }

    fn map_send_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout {
                millis: self.config.timeout_millis,
            }
        } else if error.is_builder() {
            ClientError::Configuration(error.to_string())
        } else {
            ClientError::Network(error.to_string())
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Builds direct and relay-routed transports from one configuration.
#[derive(Debug, Clone)]
pub struct TransportFactory {
    backend: BackendConfig,
    relay: RelayConfig,
    interceptors: InterceptorChain,
}

impl TransportFactory {
    pub fn new(config: &ClientConfig, interceptors: InterceptorChain) -> Self {
        Self {
            backend: config.backend.clone(),
            relay: config.relay.clone(),
            interceptors,
        }
    }

    /// Number of configured relays.
    pub fn relay_count(&self) -> usize {
        self.relay.proxies.len()
    }

    /// Compute the transport description without building a client.
    ///
    /// `relay_index` is required when `use_relay` is set and ignored otherwise.
    pub fn describe(&self, use_relay: bool, relay_index: Option<usize>) -> ClientResult<TransportConfig> {
        let endpoint = resolve_config(&self.backend, use_relay);

        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), JSON.to_string());

        let base_address = if endpoint.use_relay {
            let index = relay_index.ok_or_else(|| {
                ClientError::Configuration("relay index is required for relay-routed transports".to_string())
            })?;
            let relay = self.relay.proxies.get(index).ok_or_else(|| {
                ClientError::Configuration(format!(
                    "relay index {} out of range ({} relays configured)",
                    index,
                    self.relay.proxies.len()
                ))
            })?;

            headers.insert("Origin".to_string(), self.relay.origin.clone());
            headers.insert("X-Requested-With".to_string(), "XMLHttpRequest".to_string());
            relay.compose(&endpoint.base_address)
        } else {
            endpoint.base_address
        };

        Ok(TransportConfig {
            base_address,
            timeout_millis: endpoint.timeout_millis,
            headers,
        })
    }

    /// Build one transport.
    pub fn build(&self, use_relay: bool, relay_index: Option<usize>) -> ClientResult<Transport> {
        let config = self.describe(use_relay, relay_index)?;
        let label = match (use_relay, relay_index) {
            (true, Some(index)) => format!(
                "relay {}/{} ({})",
                index + 1,
                self.relay.proxies.len(),
                self.relay.proxies[index]
            ),
            _ => "direct".to_string(),
        };
        Transport::new(config, label, self.backend.system_proxy, self.interceptors.clone())
    }

    /// Build the direct transport followed by every relay, in configured order.
    ///
    /// The relay list is empty when relays are disabled.
    pub fn build_chain(&self) -> ClientResult<FallbackChain<Transport>> {
        let direct = self.build(false, None)?;
        let relays = if self.relay.enabled {
            (0..self.relay.proxies.len())
                .map(|i| self.build(true, Some(i)))
                .collect::<ClientResult<Vec<_>>>()?
        } else {
            Vec::new()
        };

        tracing::debug!(
            base_url = %self.backend.base_url,
            relays = relays.len(),
            "Transport chain built"
        );

        Ok(FallbackChain::new(direct, relays))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CredentialStore;

    fn factory(relay_enabled: bool) -> TransportFactory {
        let mut config = ClientConfig::default();
        config.backend.base_url = "https://api.krixo.test".to_string();
        config.backend.timeout_ms = 3000;
        config.relay.enabled = relay_enabled;
        config.relay.origin = "https://app.krixo.test".to_string();
        TransportFactory::new(&config, InterceptorChain::with_tracing(CredentialStore::new()))
    }

    #[test]
    fn test_direct_transport() {
        let config = factory(true).describe(false, Some(3)).unwrap();

        assert_eq!(config.base_address, "https://api.krixo.test");
        assert_eq!(config.timeout_millis, 3000);
        assert_eq!(config.headers.len(), 1);
        assert_eq!(config.headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_relay_transport_headers_and_address() {
        let config = factory(true).describe(true, Some(1)).unwrap();

        assert_eq!(
            config.base_address,
            "https://api.allorigins.win/raw?url=https%3A%2F%2Fapi.krixo.test"
        );
        assert_eq!(config.headers["Origin"], "https://app.krixo.test");
        assert_eq!(config.headers["X-Requested-With"], "XMLHttpRequest");
    }

    #[test]
    fn test_same_arguments_give_equal_configs() {
        let factory = factory(true);
        let a = factory.build(true, Some(0)).unwrap();
        let b = factory.build(true, Some(0)).unwrap();

        assert_eq!(a.config(), b.config());
    }

    #[test]
    fn test_invalid_relay_index() {
        let factory = factory(true);

        assert!(matches!(factory.describe(true, Some(99)), Err(ClientError::Configuration(_))));
        assert!(matches!(factory.describe(true, None), Err(ClientError::Configuration(_))));
    }

    #[test]
    fn test_chain_respects_relay_switch() {
        assert_eq!(factory(true).build_chain().unwrap().relay_count(), 5);
        assert_eq!(factory(false).build_chain().unwrap().relay_count(), 0);
    }

    #[test]
    fn test_labels() {
        let factory = factory(true);
        assert_eq!(factory.build(false, None).unwrap().to_string(), "direct");
        assert_eq!(
            factory.build(true, Some(3)).unwrap().to_string(),
            "relay 4/5 (https://corsproxy.io/?)"
        );
    }
}
