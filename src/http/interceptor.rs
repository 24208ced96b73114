//! Request/response interceptor chain.
//!
//! # Responsibilities
//! - Request phase: attach `Authorization: Bearer <token>` when a session exists
//! - Request phase: stamp a request ID for log correlation
//! - Response phase: report every failure, then hand the same error back
//!
//! # Design Decisions
//! - Credentials are looked up per request, never cached in the transport
//! - The response phase observes failures only; it never swallows or rewrites them

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

use crate::auth::CredentialStore;
use crate::http::request::{new_request_id, REQUEST_ID_HEADER};
use crate::observability::{ErrorReporter, TracingReporter};
use crate::transport::ClientError;

/// Context label passed to the reporter for failed requests.
pub const REQUEST_CONTEXT: &str = "API Request";

/// Interceptors attached to one transport.
#[derive(Clone)]
pub struct InterceptorChain {
    credentials: CredentialStore,
    reporter: Arc<dyn ErrorReporter>,
}

impl InterceptorChain {
    pub fn new(credentials: CredentialStore, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { credentials, reporter }
    }

    /// Chain that reports failures through `tracing`.
    pub fn with_tracing(credentials: CredentialStore) -> Self {
        Self::new(credentials, Arc::new(TracingReporter))
    }

    /// Request phase. Always forwards the (possibly modified) request.
    pub fn on_request(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(REQUEST_ID_HEADER, new_request_id());
        match self.credentials.token() {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Response phase for failures: report, then re-raise unchanged.
    pub fn on_error(&self, error: ClientError) -> ClientError {
        self.reporter.report(&error, REQUEST_CONTEXT);
        error
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("authenticated", &self.credentials.is_authenticated())
            .finish()
    }
}
