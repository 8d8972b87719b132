use std::time::Duration;

/// Backoff parameters for retrying transient failures.
///
/// The delay before retry `n` (1-based, counting failed attempts) is
/// `min(initial_delay * backoff_multiplier^(n - 1), max_delay)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first one, always at least 1
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
    /// Growth factor applied to the delay after each failed attempt
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(100);
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(2000);
    pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

    /// Creates a policy, treating `max_attempts` of 0 as a single attempt.
    pub fn new(
        max_attempts: u32,
        initial_delay: Duration,
        max_delay: Duration,
        backoff_multiplier: f64,
    ) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            max_delay,
            backoff_multiplier,
        }
    }

    /// Delay to wait after the given failed attempt before trying again.
    ///
    /// # Arguments
    /// - `attempt` - 1-based number of the attempt that just failed
    ///
    /// # Returns
    /// - `Duration` - Exponential delay capped at `max_delay`
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let factor = self.backoff_multiplier.powi(exponent);

        // Computed in nanoseconds so integral multipliers produce exact delays
        let delay_nanos = self.initial_delay.as_nanos() as f64 * factor;
        let max_nanos = self.max_delay.as_nanos() as f64;

        if !delay_nanos.is_finite() || delay_nanos >= max_nanos {
            return self.max_delay;
        }
        if delay_nanos <= 0.0 {
            return Duration::ZERO;
        }

        Duration::from_nanos(delay_nanos.round() as u64)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_delay: Self::DEFAULT_INITIAL_DELAY,
            max_delay: Self::DEFAULT_MAX_DELAY,
            backoff_multiplier: Self::DEFAULT_BACKOFF_MULTIPLIER,
        }
    }
}
