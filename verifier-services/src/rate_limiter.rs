//! Request spacing for article fetches
//!
//! News sites throttle aggressive clients, so consecutive fetches are spaced
//! by a minimum interval. The limiter is shared by all verifications running
//! in the process.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Default spacing between article fetches
pub const DEFAULT_FETCH_INTERVAL_MS: u64 = 500;

/// Rate limiter that enforces a minimum delay between requests.
///
/// Each caller reserves the next free time slot while holding the lock, so
/// concurrent callers are queued one interval apart instead of all waking at
/// the same instant.
#[derive(Debug)]
pub struct RateLimiter {
    /// Earliest instant at which the next request may start
    next_slot: Mutex<Option<Instant>>,
    min_interval: Duration,
    /// Name for logging purposes
    name: String,
    total_requests: AtomicU64,
    waited_requests: AtomicU64,
}

impl RateLimiter {
    pub fn new(min_interval: Duration, name: &str) -> Self {
        Self {
            next_slot: Mutex::new(None),
            min_interval,
            name: name.to_string(),
            total_requests: AtomicU64::new(0),
            waited_requests: AtomicU64::new(0),
        }
    }

    /// Wait until a request may be made
    pub async fn acquire(&self) {
        let slot = {
            let mut next_slot = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next_slot {
                Some(reserved) if reserved > now => reserved,
                _ => now,
            };
            *next_slot = Some(slot + self.min_interval);
            slot
        };

        self.total_requests.fetch_add(1, Ordering::Relaxed);

        let now = Instant::now();
        if slot > now {
            self.waited_requests.fetch_add(1, Ordering::Relaxed);
            debug!(
                "[{}] Waiting {:?} before next request",
                self.name,
                slot - now
            );
            tokio::time::sleep_until(slot).await;
        }
    }

    /// Returns (total requests, requests that had to wait)
    pub fn stats(&self) -> (u64, u64) {
        (
            self.total_requests.load(Ordering::Relaxed),
            self.waited_requests.load(Ordering::Relaxed),
        )
    }
}
