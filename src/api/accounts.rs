//! Account registration and session operations.

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::errors::OperationError;
use crate::api::types::{LoginRequest, WorkerProfile};
use crate::transport::Transport;

/// Facade over the account and login endpoints.
pub struct AccountsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AccountsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Register an account. The body is forwarded as-is.
    pub async fn register(&self, account: &Value) -> Result<Value, OperationError> {
        self.client
            .run("Registration", |transport: Transport| {
                let account = account.clone();
                async move { transport.post("/Regestration", &account).await }
            })
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Value, OperationError> {
        let path = format!("/account/{}", id);

        self.client
            .run("GetAccount", |transport: Transport| {
                let path = path.clone();
                async move { transport.get(&path).await }
            })
            .await
    }

    /// Fetch an account and decode it as a worker profile.
    pub async fn profile(&self, id: &str) -> Result<WorkerProfile, OperationError> {
        let account = self.get(id).await?;
        // Some deployments wrap the record as `{ "worker": { ... } }`.
        let record = match account.get("worker").filter(|w| w.is_object()).cloned() {
            Some(worker) => worker,
            None => account,
        };

        serde_json::from_value(record).map_err(|e| {
            tracing::warn!(error = %e, "Account record is not a worker profile");
            OperationError::new("GetAccount failed: unexpected response from the server")
        })
    }

    /// Log in. A token in the response starts a session on the shared store.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Value, OperationError> {
        let response = self
            .client
            .run("Login", |transport: Transport| {
                let credentials = credentials.clone();
                async move { transport.post("/login", &credentials).await }
            })
            .await?;

        match response.get("token").and_then(Value::as_str) {
            Some(token) => {
                self.client.credentials().set_token(token);
                tracing::info!("Logged in");
            }
            None => tracing::warn!("Login response carried no token; session unchanged"),
        }

        Ok(response)
    }

    /// End the session. No network call is made.
    pub fn logout(&self) {
        self.client.credentials().clear();
        tracing::info!("Logged out");
    }
}
