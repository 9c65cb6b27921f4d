use std::time::Duration;

/// Backoff schedule for transient platform-request failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub growth: u32,
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(10),
            growth: 2,
            max_attempts: 4,
        }
    }
}

impl RetryPolicy {
    /// Delay to sleep before retry number `attempt` (1-based; attempt 1 is
    /// the first retry after the initial failure).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = self.growth.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor).min(self.max_backoff)
    }
}
