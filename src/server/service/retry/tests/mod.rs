
use std::time::Duration;

use tokio::time::Instant;

use super::*;

/// Policy with the default delays and a custom attempt budget
fn policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(
        max_attempts,
        Duration::from_millis(100),
        Duration::from_millis(2000),
        2.0,
    )
}

/// Asserts the paused clock advanced by `expected`, allowing for timer tick rounding
fn assert_elapsed(start: Instant, expected: Duration) {
    let elapsed = start.elapsed();

    assert!(
        elapsed >= expected && elapsed <= expected + Duration::from_millis(10),
        "expected {:?} to have elapsed, got {:?}",
        expected,
        elapsed
    );
}
