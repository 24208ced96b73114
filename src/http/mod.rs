//! HTTP request plumbing shared by all transports.
//!
//! # Data Flow
//! ```text
//! Transport builds request
//!     → interceptor.rs on_request (request ID, bearer token)
//!     → reqwest dispatch
//!     → on failure: interceptor.rs on_error (report, re-raise)
//! ```

pub mod interceptor;
pub mod request;

pub use interceptor::InterceptorChain;
