//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → reporting.rs (failed requests, via the ErrorReporter trait)
//!
//! Consumers:
//!     → stderr (pretty) or stdout (JSON lines)
//!     → any ErrorReporter the host application installs
//! ```

pub mod logging;
pub mod reporting;

pub use reporting::{ErrorReporter, MemoryReporter, TracingReporter};
