//! Session authentication state.
//!
//! # Data Flow
//! ```text
//! login response (token)
//!     → credentials.rs (CredentialStore::set_token)
//!     → read by http::interceptor on every outgoing request
//!     → CredentialStore::clear on logout
//! ```

pub mod credentials;

pub use credentials::{CredentialStore, AUTH_TOKEN_KEY};
