//! Bounded Retry Policy
//!
//! A small retry abstraction: fixed number of attempts with a fixed pause
//! between them. Only errors are retried - the first `Ok` wins. Tests run
//! under tokio's paused clock, so the backoff sleeps cost no wall-clock time.

use std::future::Future;
use std::time::Duration;

/// Retry an operation up to `max_attempts` times with a fixed backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl RetryPolicy {
    /// Create a policy. `max_attempts` is clamped to at least 1.
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Invoke `op` until it succeeds or attempts are exhausted, pausing
    /// between attempts. The last error is returned when every attempt fails.
    pub async fn run<T, E, F, Fut>(&self, op: F) -> Result<T, E>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= self.max_attempts => return Err(e),
                Err(e) => {
                    tracing::debug!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "attempt failed, backing off"
                    );
                    tokio::time::sleep(self.backoff).await;
                    attempt += 1;
                }
            }
        }
    }
}
