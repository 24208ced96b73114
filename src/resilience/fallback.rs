//! Sequential direct-then-relay fallback.
//!
//! # State Machine
//! ```text
//! Direct ──ok──▶ return
//!   │ err (recorded)
//!   ▼
//! Relay(0) ──ok──▶ return
//!   │ err (overwrites recorded)
//!   ▼
//!  ...
//!   ▼
//! Relay(n-1) ──err──▶ return last recorded error
//! ```
//!
//! # Design Decisions
//! - Direct is always tried exactly once, first
//! - Relays are tried in configured order, one pass, never concurrently
//! - Only the most recent failure survives
//! - Generic over the target: the chain never sees HTTP verbs or payloads

use std::fmt::Display;
use std::future::Future;

/// An ordered set of targets: one direct, then relays.
#[derive(Debug, Clone)]
pub struct FallbackChain<T> {
    direct: T,
    relays: Vec<T>,
}

impl<T> FallbackChain<T>
where
    T: Clone + Display,
{
    pub fn new(direct: T, relays: Vec<T>) -> Self {
        Self { direct, relays }
    }

    pub fn direct(&self) -> &T {
        &self.direct
    }

    pub fn relays(&self) -> &[T] {
        &self.relays
    }

    pub fn relay_count(&self) -> usize {
        self.relays.len()
    }

    /// Run `call` against Direct, then each relay, until one succeeds.
    ///
    /// `max_relay_attempts` caps how many relays are tried (all when `None`).
    /// Direct is never skipped. If every attempt fails, the error of the last
    /// attempt is returned.
    pub async fn attempt<F, Fut, R, E>(&self, mut call: F, max_relay_attempts: Option<usize>) -> Result<R, E>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<R, E>>,
        E: Display,
    {
        tracing::debug!(route = %self.direct, "Trying direct connection");
        let mut last_error = match call(self.direct.clone()).await {
            Ok(result) => return Ok(result),
            Err(e) => {
                tracing::warn!(route = %self.direct, error = %e, "Direct connection failed");
                e
            }
        };

        let total = self.relays.len();
        let limit = max_relay_attempts.unwrap_or(total).min(total);

        for (i, relay) in self.relays.iter().take(limit).enumerate() {
            tracing::debug!(attempt = i + 1, total, route = %relay, "Trying relay");
            match call(relay.clone()).await {
                Ok(result) => {
                    tracing::info!(attempt = i + 1, route = %relay, "Relay succeeded");
                    return Ok(result);
                }
                Err(e) => {
                    tracing::warn!(attempt = i + 1, route = %relay, error = %e, "Relay failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;

    fn chain() -> FallbackChain<&'static str> {
        FallbackChain::new("direct", vec!["relay-0", "relay-1", "relay-2"])
    }

    /// Fails on every target except the ones listed in `healthy`.
    async fn run(
        chain: &FallbackChain<&'static str>,
        healthy: &[&'static str],
        max: Option<usize>,
    ) -> (Result<String, String>, Vec<&'static str>) {
        let mut calls = Vec::new();
        let result = chain
            .attempt(
                |target| {
                    calls.push(target);
                    ready(if healthy.contains(&target) {
                        Ok(format!("payload from {}", target))
                    } else {
                        Err(format!("{} down", target))
                    })
                },
                max,
            )
            .await;
        (result, calls)
    }

    #[tokio::test]
    async fn test_direct_success_skips_relays() {
        let (result, calls) = run(&chain(), &["direct", "relay-0"], None).await;

        assert_eq!(result.unwrap(), "payload from direct");
        assert_eq!(calls, vec!["direct"]);
    }

    #[tokio::test]
    async fn test_first_relay_success_wins() {
        let (result, calls) = run(&chain(), &["relay-1", "relay-2"], None).await;

        assert_eq!(result.unwrap(), "payload from relay-1");
        assert_eq!(calls, vec!["direct", "relay-0", "relay-1"]);
    }

    #[tokio::test]
    async fn test_all_fail_returns_last_error() {
        let (result, calls) = run(&chain(), &[], None).await;

        assert_eq!(result.unwrap_err(), "relay-2 down");
        assert_eq!(calls, vec!["direct", "relay-0", "relay-1", "relay-2"]);
    }

    #[tokio::test]
    async fn test_zero_relay_attempts_only_tries_direct() {
        let (result, calls) = run(&chain(), &["relay-0"], Some(0)).await;

        assert_eq!(result.unwrap_err(), "direct down");
        assert_eq!(calls, vec!["direct"]);
    }

    #[tokio::test]
    async fn test_cap_limits_relays_in_order() {
        let (result, calls) = run(&chain(), &["relay-2"], Some(2)).await;

        assert_eq!(result.unwrap_err(), "relay-1 down");
        assert_eq!(calls, vec!["direct", "relay-0", "relay-1"]);
    }

    #[tokio::test]
    async fn test_cap_above_relay_count_is_clamped() {
        let (_, calls) = run(&chain(), &[], Some(10)).await;
        assert_eq!(calls.len(), 4);
    }

    #[tokio::test]
    async fn test_no_relays_returns_direct_error() {
        let chain = FallbackChain::new("direct", Vec::new());
        let (result, calls) = run(&chain, &[], None).await;

        assert_eq!(result.unwrap_err(), "direct down");
        assert_eq!(calls, vec!["direct"]);
    }

    #[tokio::test]
    async fn test_attempts_are_sequential() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;
        use std::time::Duration;

        let in_flight = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let result: Result<(), String> = chain()
            .attempt(
                |target| {
                    let in_flight = in_flight.clone();
                    let max_seen = max_seen.clone();
                    async move {
                        let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                        max_seen.fetch_max(now, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        in_flight.fetch_sub(1, Ordering::SeqCst);
                        Err(format!("{} down", target))
                    }
                },
                None,
            )
            .await;

        assert!(result.is_err());
        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }
}
