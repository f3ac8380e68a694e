//! Request correlation for simulated provider calls
//!
//! Every in-flight call (login, search, connect) is tagged with a
//! monotonically increasing [`RequestId`]. State segments remember the id of
//! the newest request they started and drop responses carrying any other id,
//! so a slow response can never overwrite a newer one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    /// Raw counter value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues request ids, shared by every view in a session
#[derive(Debug, Default)]
pub struct RequestTracker {
    next: AtomicU64,
}

impl RequestTracker {
    /// Create a tracker starting at id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id
    pub fn issue(&self) -> RequestId {
        RequestId(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_monotonically() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();
        assert_eq!(first.get(), 1);
        assert!(second > first);
        assert_eq!(second.to_string(), "#2");
    }
}
