//! Retry with exponential backoff for operations that can fail transiently.
//!
//! A [`RetryContext`] runs an async operation until it succeeds, fails with an error its
//! [`TransientClassifier`] deems permanent, or runs out of attempts. Between attempts it sleeps
//! for the delay computed by its [`RetryPolicy`]. Permanent errors are returned immediately and
//! the last error is returned once attempts are exhausted.

pub mod classifier;
pub mod policy;

#[cfg(test)]
mod tests;

use std::{fmt::Debug, future::Future};

use dioxus_logger::tracing;

use crate::server::error::Error;

pub use classifier::{DbErrClassifier, MessageClassifier, TransientClassifier};
pub use policy::RetryPolicy;

/// Context for executing operations with automatic retry logic.
///
/// # Type Parameters
/// - `C` - Classifier deciding which errors are retried, [`DbErrClassifier`] by default
///
/// # Example
///
/// ```ignore
/// let ctx = RetryContext::new().with_policy(state.retry_policy);
///
/// let db = &state.db;
/// ctx.execute_with_retry("database ping", || async move {
///     db.ping().await.map_err(Error::from)
/// })
/// .await?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct RetryContext<C = DbErrClassifier> {
    policy: RetryPolicy,
    classifier: C,
}

impl RetryContext {
    /// Creates a context with the default policy and the database classifier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> RetryContext<C> {
    /// Creates a context with a custom classifier.
    pub fn with_classifier(policy: RetryPolicy, classifier: C) -> Self {
        Self { policy, classifier }
    }

    /// Replaces the backoff policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Execute an operation with automatic retry logic
    ///
    /// The operation is invoked again for every attempt, so it must build a fresh future each
    /// time. A warning carrying the attempt count and delay is logged before each retry.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "database ping")
    /// - `operation`: Produces the future for one attempt
    ///
    /// # Returns
    /// - `Ok(R)` - Result of the first successful attempt
    /// - `Err(E)` - The first permanent error, or the last transient error once attempts are
    ///   exhausted
    pub async fn execute_with_retry<R, E, F, Fut>(
        &self,
        description: &str,
        mut operation: F,
    ) -> Result<R, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R, E>>,
        E: Debug,
        C: TransientClassifier<E>,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt,
                max_attempts
            );

            let e = match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => e,
            };

            if !self.classifier.is_transient(&e) {
                tracing::error!("Permanent error for {}: {:?}", description, e);
                return Err(e);
            }

            if attempt >= max_attempts {
                tracing::error!(
                    "Max attempts ({}) exceeded for {}: {:?}",
                    max_attempts,
                    description,
                    e
                );
                return Err(e);
            }

            let delay = self.policy.delay_for_attempt(attempt);

            tracing::warn!(
                "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                description,
                attempt,
                max_attempts,
                delay,
                e
            );

            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/// Runs a persistence operation with the default database retry behaviour.
///
/// # Arguments
/// - `operation` - Produces the future for one attempt
/// - `policy` - Backoff policy, [`RetryPolicy::default`] when `None`
pub async fn with_retry<R, F, Fut>(operation: F, policy: Option<RetryPolicy>) -> Result<R, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, Error>>,
{
    RetryContext::new()
        .with_policy(policy.unwrap_or_default())
        .execute_with_retry("database operation", operation)
        .await
}
