//! Command (job request) operations.

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::errors::OperationError;
use crate::api::types::{CommandPayload, NewCommand, StatusUpdate};
use crate::transport::Transport;

/// Facade over the command endpoints.
pub struct CommandsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CommandsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Place a new command.
    pub async fn create(&self, command: &NewCommand) -> Result<Value, OperationError> {
        let payload = CommandPayload::from(command);
        tracing::debug!(?payload, "Sending command data");

        let created = self
            .client
            .run("CreateCommand", |transport: Transport| {
                let payload = payload.clone();
                async move { transport.post("/CreateCommand", &payload).await }
            })
            .await?;

        tracing::info!("Command created");
        Ok(created)
    }

    /// List every command.
    pub async fn list(&self) -> Result<Value, OperationError> {
        self.client
            .run("GetCommands", |transport: Transport| async move {
                transport.get("/GetCommands").await
            })
            .await
    }

    /// Approve or reject a command.
    pub async fn update_status(&self, id: &str, status: &str) -> Result<Value, OperationError> {
        let path = format!("/commands/{}/status", id);
        let body = StatusUpdate::new(status);

        self.client
            .run("UpdateCommandStatus", |transport: Transport| {
                let path = path.clone();
                let body = body.clone();
                async move { transport.put(&path, &body).await }
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Value, OperationError> {
        let path = format!("/commands/{}", id);

        self.client
            .run("DeleteCommand", |transport: Transport| {
                let path = path.clone();
                async move { transport.delete(&path).await }
            })
            .await
    }
}
