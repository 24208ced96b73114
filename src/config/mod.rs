//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → handed to TransportFactory / ApiClient at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; transports are rebuilt to pick up changes
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ClientConfig;
pub use schema::BackendConfig;
pub use schema::RelayConfig;
pub use schema::ObservabilityConfig;
