//! Transport-level types and error definitions.

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors produced by a single transport attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Connection, DNS or protocol failure before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// The attempt exceeded the transport's fixed timeout.
    #[error("Request timed out after {millis} ms")]
    Timeout { millis: u64 },

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Programmer error, e.g. an out-of-range relay index.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Connection-level failures (including timeouts).
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::Timeout { .. })
    }

    /// HTTP status code, when the server was reached.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for transport operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Value description of a transport: where it sends requests and how.
///
/// Two configs built from the same arguments compare equal even though the
/// transports that own them are distinct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Base address every request path is appended to.
    pub base_address: String,
    /// Fixed per-request timeout.
    pub timeout_millis: u64,
    /// Headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl TransportConfig {
    /// Join an operation path onto the base address with exactly one `/`.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_address.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> TransportConfig {
        TransportConfig {
            base_address: base.to_string(),
            timeout_millis: 1000,
            headers: BTreeMap::new(),
        }
    }

    #[test]
    fn test_url_join() {
        assert_eq!(config("http://api.test").url_for("/GetWorkers"), "http://api.test/GetWorkers");
        assert_eq!(config("http://api.test/").url_for("GetWorkers"), "http://api.test/GetWorkers");
        assert_eq!(
            config("https://relay.test/raw?url=http%3A%2F%2Fapi.test").url_for("/login"),
            "https://relay.test/raw?url=http%3A%2F%2Fapi.test/login"
        );
    }

    #[test]
    fn test_error_classes() {
        assert!(ClientError::Timeout { millis: 10 }.is_network());
        assert!(ClientError::Network("refused".into()).is_network());

        let err = ClientError::HttpStatus { status: 503, body: "down".into() };
        assert!(!err.is_network());
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "HTTP 503: down");
    }
}
