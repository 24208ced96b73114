//! Transport subsystem.
//!
//! # Data Flow
//! ```text
//! BackendConfig
//!     → endpoint.rs (canonical address + timeout)
//!     → relay.rs (optional relay composition per RelayKind)
//!     → factory.rs (headers, reqwest client, interceptors)
//!     → Transport (direct, or one per relay)
//! ```
//!
//! # Design Decisions
//! - Transports are immutable once built; only the shared credential store changes
//! - A transport knows nothing about fallback; resilience::fallback orders the attempts

pub mod endpoint;
pub mod factory;
pub mod relay;
pub mod types;

pub use endpoint::{resolve_config, EndpointConfig};
pub use factory::{Transport, TransportFactory};
pub use relay::{RelayAddress, RelayKind};
pub use types::{ClientError, ClientResult, TransportConfig};
