//! Outgoing request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) per dispatched request
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Each attempt of a fallback chain gets its own ID

use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generate a fresh request ID.
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let a = new_request_id();
        let b = new_request_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
