//! Operation-level errors and user-facing classification.

use serde_json::Value;
use thiserror::Error;

use crate::transport::ClientError;

/// Terminal failure of a facade operation.
///
/// Carries only the user-facing message; the underlying transport error has
/// already been reported by the interceptor chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OperationError {
    message: String,
}

impl OperationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Turns a transport failure into a message for the end user.
pub trait ErrorClassifier: Send + Sync {
    fn classify(&self, error: &ClientError, operation: &str) -> String;
}

/// Status-code and failure-class based messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassifier;

impl ErrorClassifier for DefaultClassifier {
    fn classify(&self, error: &ClientError, operation: &str) -> String {
        let detail = match error {
            ClientError::Timeout { .. } => "the server took too long to respond".to_string(),
            ClientError::Network(_) => "unable to reach the server, check your connection".to_string(),
            ClientError::HttpStatus { status, body } => match server_message(body) {
                Some(message) => message,
                None => status_message(*status),
            },
            ClientError::Decode(_) => "unexpected response from the server".to_string(),
            ClientError::Configuration(_) => "the client is misconfigured".to_string(),
        };
        format!("{} failed: {}", operation, detail)
    }
}

/// Message the backend put in its error body, if any.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

fn status_message(status: u16) -> String {
    match status {
        400 => "the request data is invalid".to_string(),
        401 => "authentication required, please log in".to_string(),
        403 => "access denied".to_string(),
        404 => "resource not found".to_string(),
        409 => "the request conflicts with existing data".to_string(),
        500..=599 => "server error, please try again later".to_string(),
        other => format!("request failed with status {}", other),
    }
}
