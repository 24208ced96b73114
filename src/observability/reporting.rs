//! Failure reporting collaborator.
//!
//! Transports hand every failed attempt to an [`ErrorReporter`] before the
//! error travels back to the caller. Reporting never changes control flow.

use std::sync::{Arc, Mutex};

use crate::transport::ClientError;

/// Records diagnostics for a failed request.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &ClientError, context: &str);
}

/// Emits each failure as a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &ClientError, context: &str) {
        match error.status() {
            Some(status) => tracing::error!(context, status, error = %error, "Request failed"),
            None => tracing::error!(context, error = %error, "Request failed"),
        }
    }
}

/// Keeps reported failures in memory, for inspection in tests and tools.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    entries: Arc<Mutex<Vec<(String, ClientError)>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of `(context, error)` pairs in report order.
    pub fn entries(&self) -> Vec<(String, ClientError)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl ErrorReporter for MemoryReporter {
    fn report(&self, error: &ClientError, context: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((context.to_string(), error.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_keeps_order() {
        let reporter = MemoryReporter::new();
        reporter.report(&ClientError::Network("refused".into()), "API Request");
        reporter.report(&ClientError::Timeout { millis: 5 }, "API Request");

        let entries = reporter.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1, ClientError::Network("refused".into()));
        assert_eq!(entries[1].0, "API Request");
    }
}
