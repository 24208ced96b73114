//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that backend and relay addresses are usable http(s) URLs
//! - Validate value ranges (timeout > 0)
//! - Check header-bound values (relay origin) and log level names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use reqwest::header::HeaderValue;
use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("backend.base_url '{0}' is not a valid http(s) URL")]
    InvalidBaseUrl(String),

    #[error("backend.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("relay.proxies[{index}] template '{template}' is not a valid http(s) URL prefix")]
    InvalidRelayTemplate { index: usize, template: String },

    #[error("relay.origin '{0}' is not a valid header value")]
    InvalidOrigin(String),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_http_url(&config.backend.base_url) {
        errors.push(ValidationError::InvalidBaseUrl(config.backend.base_url.clone()));
    }

    if config.backend.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    for (index, proxy) in config.relay.proxies.iter().enumerate() {
        if !is_http_url(&proxy.template) {
            errors.push(ValidationError::InvalidRelayTemplate {
                index,
                template: proxy.template.clone(),
            });
        }
    }

    if HeaderValue::from_str(&config.relay.origin).is_err() {
        errors.push(ValidationError::InvalidOrigin(config.relay.origin.clone()));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
