//! API client wiring.
//!
//! # Responsibilities
//! - Build the transport chain from configuration
//! - Own the collaborators (credential store, reporter, classifier)
//! - Run facade calls through the fallback chain and classify failures

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::api::accounts::AccountsApi;
use crate::api::commands::CommandsApi;
use crate::api::errors::{DefaultClassifier, ErrorClassifier, OperationError};
use crate::api::workers::WorkersApi;
use crate::auth::CredentialStore;
use crate::config::ClientConfig;
use crate::http::InterceptorChain;
use crate::observability::{ErrorReporter, TracingReporter};
use crate::resilience::FallbackChain;
use crate::transport::{ClientError, ClientResult, Transport, TransportFactory};

/// Entry point to the backend API.
///
/// Cheap to clone; clones share transports and the credential store.
#[derive(Clone)]
pub struct ApiClient {
    chain: Arc<FallbackChain<Transport>>,
    credentials: CredentialStore,
    classifier: Arc<dyn ErrorClassifier>,
    max_relay_attempts: Option<usize>,
}

impl ApiClient {
    /// Create a client that logs failures through `tracing`.
    pub fn new(config: &ClientConfig, credentials: CredentialStore) -> ClientResult<Self> {
        Self::with_collaborators(
            config,
            credentials,
            Arc::new(TracingReporter),
            Arc::new(DefaultClassifier),
        )
    }

    /// Create a client with explicit reporting and classification collaborators.
    pub fn with_collaborators(
        config: &ClientConfig,
        credentials: CredentialStore,
        reporter: Arc<dyn ErrorReporter>,
        classifier: Arc<dyn ErrorClassifier>,
    ) -> ClientResult<Self> {
        let interceptors = InterceptorChain::new(credentials.clone(), reporter);
        let chain = TransportFactory::new(config, interceptors).build_chain()?;

        tracing::info!(
            base_url = %config.backend.base_url,
            relays = chain.relay_count(),
            max_relay_attempts = ?config.relay.max_attempts,
            "API client ready"
        );

        Ok(Self {
            chain: Arc::new(chain),
            credentials,
            classifier,
            max_relay_attempts: config.relay.max_attempts,
        })
    }

    pub fn commands(&self) -> CommandsApi<'_> {
        CommandsApi::new(self)
    }

    pub fn workers(&self) -> WorkersApi<'_> {
        WorkersApi::new(self)
    }

    pub fn accounts(&self) -> AccountsApi<'_> {
        AccountsApi::new(self)
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn chain(&self) -> &FallbackChain<Transport> {
        &self.chain
    }

    /// Run one facade call through the fallback chain.
    ///
    /// Any failure is replaced by the classifier's user-facing message.
    pub(crate) async fn run<F, Fut>(&self, operation: &'static str, call: F) -> Result<Value, OperationError>
    where
        F: FnMut(Transport) -> Fut,
        Fut: Future<Output = Result<Value, ClientError>>,
    {
        match self.chain.attempt(call, self.max_relay_attempts).await {
            Ok(value) => {
                tracing::debug!(operation, "Operation succeeded");
                Ok(value)
            }
            Err(error) => {
                let message = self.classifier.classify(&error, operation);
                tracing::warn!(operation, error = %error, "Operation failed");
                Err(OperationError::new(message))
            }
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("direct", &self.chain.direct().base_address())
            .field("relays", &self.chain.relay_count())
            .field("max_relay_attempts", &self.max_relay_attempts)
            .finish()
    }
}
