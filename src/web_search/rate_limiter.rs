//! Minimum-interval throttle for the Brave Search API
//!
//! One `RateLimiter` is created at startup and shared by `Arc` with every search
//! client. The lock is held across the wait, so concurrent callers queue behind
//! each other and outbound requests are always at least `min_interval` apart.
//! Callers are delayed, never rejected.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Limiter allowing at most `rps` requests per second (`rps` of 0 is treated as 1)
    #[must_use]
    pub fn from_rps(rps: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(rps.max(1))))
    }

    #[must_use]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until the next request may be sent, then record it as sent.
    ///
    /// Returns how long the caller was delayed inside the critical section.
    pub async fn throttle(&self) -> Duration {
        let mut last_request = self.last_request.lock().await;
        let mut waited = Duration::ZERO;

        if let Some(previous) = *last_request {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                waited = self.min_interval - elapsed;
                info!(
                    "Rate limiting: sleeping for {:.3} seconds (interval: {:.3}s)",
                    waited.as_secs_f64(),
                    self.min_interval.as_secs_f64()
                );
                tokio::time::sleep(waited).await;
            }
        }

        *last_request = Some(Instant::now());
        waited
    }
}
