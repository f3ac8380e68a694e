//! Simulated network round trips
//!
//! Every mock call waits a configurable delay and can be switched into a
//! failing mode, so views exercise their loading and error paths.

use harmony_core::{HarmonyError, Result};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// Per-operation simulated delays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Latency {
    /// Email and demo login
    pub login: Duration,

    /// Cross-service search
    pub search: Duration,

    /// OAuth-style service connect
    pub connect: Duration,

    /// Catalog browsing (tracks, playlists)
    pub catalog: Duration,
}

impl Latency {
    /// No delay at all
    pub const fn instant() -> Self {
        Self {
            login: Duration::ZERO,
            search: Duration::ZERO,
            connect: Duration::ZERO,
            catalog: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(1000),
            search: Duration::from_millis(500),
            connect: Duration::from_millis(1500),
            catalog: Duration::ZERO,
        }
    }
}

/// A fake network link with fixed latency
#[derive(Debug, Default)]
pub struct SimulatedNetwork {
    delay: Duration,
    failing: AtomicBool,
}

impl SimulatedNetwork {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failing: AtomicBool::new(false),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Make subsequent round trips fail after their delay
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn is_failing(&self) -> bool {
        self.failing.load(Ordering::SeqCst)
    }

    /// Wait out the delay, then succeed or fail
    pub async fn round_trip(&self, operation: &'static str) -> Result<()> {
        debug!(operation, delay_ms = self.delay.as_millis() as u64, "Simulated request");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.is_failing() {
            warn!(operation, "Simulated network failure");
            return Err(HarmonyError::network(format!("{operation} failed")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_latency_matches_flows() {
        let latency = Latency::default();
        assert_eq!(latency.login, Duration::from_millis(1000));
        assert_eq!(latency.search, Duration::from_millis(500));
        assert_eq!(latency.connect, Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn round_trip_waits_for_delay() {
        let network = SimulatedNetwork::new(Duration::from_millis(500));
        let start = tokio::time::Instant::now();

        network.round_trip("search").await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn failing_network_reports_network_error() {
        let network = SimulatedNetwork::new(Duration::from_millis(10));
        network.set_failing(true);

        let err = network.round_trip("login").await.unwrap_err();
        assert!(err.is_network());
    }
}
