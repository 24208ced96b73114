//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Facade operation:
//!     → fallback.rs (Direct, then Relay(0..n) until one succeeds)
//!     → each attempt bounded by its transport's own timeout
//! ```
//!
//! # Design Decisions
//! - One pass per transport; callers wanting more retries call again
//! - No backoff between attempts: each one targets a different route
//! - Attempts are strictly sequential

pub mod fallback;

pub use fallback::FallbackChain;
