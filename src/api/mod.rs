//! Domain API facades.
//!
//! # Data Flow
//! ```text
//! domain object (NewCommand, NewWorker, ...)
//!     → types.rs (wire shape: field renames, coercions)
//!     → commands.rs / workers.rs / accounts.rs (verb + path + body)
//!     → client.rs (FallbackChain over direct + relay transports)
//!     → on failure: errors.rs (ErrorClassifier → OperationError)
//! ```
//!
//! # Design Decisions
//! - Facades return the backend's JSON as-is (`Null` for empty bodies)
//! - Callers only ever see the user-facing message of a failure

pub mod accounts;
pub mod client;
pub mod commands;
pub mod errors;
pub mod types;
pub mod workers;

pub use accounts::AccountsApi;
pub use client::ApiClient;
pub use commands::CommandsApi;
pub use errors::{DefaultClassifier, ErrorClassifier, OperationError};
pub use types::{
    CommandPayload, LoginRequest, NewCommand, NewWorker, StatusUpdate, WorkerPayload, WorkerProfile,
    DEFAULT_WORKER_PASSWORD,
};
pub use workers::WorkersApi;
