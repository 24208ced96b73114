//! Worker operations.

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::errors::OperationError;
use crate::api::types::{NewWorker, StatusUpdate, WorkerPayload};
use crate::transport::Transport;

/// Facade over the worker endpoints.
pub struct WorkersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> WorkersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Submit a worker application.
    pub async fn create(&self, worker: &NewWorker) -> Result<Value, OperationError> {
        let payload = WorkerPayload::from(worker);

        self.client
            .run("CreateWorker", |transport: Transport| {
                let payload = payload.clone();
                async move { transport.post("/CreateWorker", &payload).await }
            })
            .await
    }

    pub async fn list(&self) -> Result<Value, OperationError> {
        self.client
            .run("GetWorkers", |transport: Transport| async move {
                transport.get("/GetWorkers").await
            })
            .await
    }

    /// Approve or reject a worker, optionally assigning a password.
    pub async fn update_status(
        &self,
        id: &str,
        status: &str,
        password: Option<&str>,
    ) -> Result<Value, OperationError> {
        let path = format!("/workers/{}/status", id);
        let body = StatusUpdate::new(status).with_password(password);

        self.client
            .run("UpdateWorkerStatus", |transport: Transport| {
                let path = path.clone();
                let body = body.clone();
                async move { transport.put(&path, &body).await }
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Value, OperationError> {
        let path = format!("/workers/{}", id);

        self.client
            .run("DeleteWorker", |transport: Transport| {
                let path = path.clone();
                async move { transport.delete(&path).await }
            })
            .await
    }
}
