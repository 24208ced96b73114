//! KRIXO backend API client library.
//!
//! Every operation is tried against the backend directly first and, if that
//! fails, through an ordered list of public CORS relays.

pub mod api;
pub mod auth;
pub mod config;
pub mod http;
pub mod observability;
pub mod resilience;
pub mod transport;

pub use api::{ApiClient, OperationError};
pub use auth::CredentialStore;
pub use config::schema::ClientConfig;
pub use resilience::FallbackChain;
pub use transport::{ClientError, Transport, TransportFactory};
