//! Credential storage shared by every transport.
//!
//! # Responsibilities
//! - Hold the bearer token of the current session
//! - Provide a read-only lookup for the request interceptor
//! - Explicit lifecycle: set on login, cleared on logout
//!
//! # Design Decisions
//! - Key-value store keyed by a fixed name, so other session values can join later
//! - Cloning the store shares it (Arc around a DashMap)
//! - Last writer wins; no transactional guarantees

use dashmap::DashMap;
use std::sync::Arc;

/// Storage key of the bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// A thread-safe, shareable credential store.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    inner: Arc<DashMap<String, String>>,
}

impl CredentialStore {
    /// Create an empty store (no session).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with an existing session token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }

    /// Current bearer token, if a session is active.
    pub fn token(&self) -> Option<String> {
        self.inner.get(AUTH_TOKEN_KEY).map(|r| r.value().clone())
    }

    /// Store the bearer token of a new session.
    pub fn set_token(&self, token: impl Into<String>) {
        self.inner.insert(AUTH_TOKEN_KEY.to_string(), token.into());
        tracing::debug!("Session token stored");
    }

    /// Forget the current session.
    pub fn clear(&self) {
        if self.inner.remove(AUTH_TOKEN_KEY).is_some() {
            tracing::debug!("Session token cleared");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.contains_key(AUTH_TOKEN_KEY)
    }
}
