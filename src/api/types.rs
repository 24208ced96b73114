//! Domain inputs and their backend wire shapes.
//!
//! The backend uses its own field names (`firstName`, `distination`,
//! `isaccepted`, ...). Conversion happens here, once, so facades only ever
//! serialize the wire types.

use serde::{Deserialize, Serialize};

/// Password sent when a worker registers without choosing one.
pub const DEFAULT_WORKER_PASSWORD: &str = "defaultPassword123!";

/// A job request placed by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommand {
    pub name: String,
    pub phone: String,
    pub services: Vec<String>,
    pub workers: u32,
    pub start: String,
    pub end: String,
}

/// Backend shape of [`NewCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandPayload {
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub number: String,
    pub service: String,
    pub workers: String,
    pub start: String,
    pub distination: String,
}

impl From<&NewCommand> for CommandPayload {
    fn from(command: &NewCommand) -> Self {
        Self {
            first_name: command.name.clone(),
            number: command.phone.clone(),
            service: command.services.join(", "),
            workers: command.workers.to_string(),
            start: command.start.clone(),
            distination: command.end.clone(),
        }
    }
}

/// A worker application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewWorker {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub position: String,
    pub experience: String,
    pub message: String,
    #[serde(default)]
    pub is_accepted: bool,
}

/// Backend shape of [`NewWorker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerPayload {
    pub fullname: String,
    pub number: String,
    pub email: String,
    pub password: String,
    pub position: String,
    pub experience: String,
    pub message: String,
    pub isaccepted: bool,
}

impl From<&NewWorker> for WorkerPayload {
    fn from(worker: &NewWorker) -> Self {
        let password = worker
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_WORKER_PASSWORD)
            .to_string();

        Self {
            fullname: worker.name.clone(),
            number: worker.phone.clone(),
            email: worker.email.clone(),
            password,
            position: worker.position.clone(),
            experience: worker.experience.clone(),
            message: worker.message.clone(),
            isaccepted: worker.is_accepted,
        }
    }
}

/// Body of a status change (approve/reject).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl StatusUpdate {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            password: None,
        }
    }

    /// Attach a password; empty strings are treated as absent.
    pub fn with_password(mut self, password: Option<&str>) -> Self {
        self.password = password.filter(|p| !p.is_empty()).map(str::to_string);
        self
    }
}

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A worker record as shown on the profile screen.
///
/// Accepts both the backend's wire spelling and the camelCase spelling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerProfile {
    pub id: Option<serde_json::Value>,
    #[serde(alias = "fullname")]
    pub name: String,
    #[serde(alias = "number")]
    pub phone: String,
    pub email: String,
    pub position: String,
    pub experience: String,
    pub message: String,
    #[serde(alias = "isaccepted", alias = "isAccepted")]
    pub is_accepted: bool,
    #[serde(alias = "createdAt")]
    pub created_at: Option<String>,
}
