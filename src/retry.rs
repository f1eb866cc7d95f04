//! Fixed-backoff retry for upstream calls.
//!
//! The policy is deliberately simple: a fixed number of additional attempts
//! with a fixed delay between them, retrying only errors classified as
//! transient. Exhaustion surfaces as a single error carrying the attempt
//! count and the last underlying failure.

use std::time::Duration;

use tokio::time::sleep;

use crate::error::TranslationError;

/// Retry policy configuration.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Additional attempts after the first.
    pub max_retries: u32,
    /// Fixed delay between attempts.
    pub backoff: Duration,
    /// Custom retry condition; defaults to
    /// [`TranslationError::is_retryable`].
    pub retry_condition: Option<fn(&TranslationError) -> bool>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Duration::from_secs(60),
            retry_condition: None,
        }
    }
}

impl RetryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of additional attempts after the first.
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the fixed delay between attempts.
    pub const fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Set a custom retry condition.
    pub fn with_retry_condition(mut self, condition: fn(&TranslationError) -> bool) -> Self {
        self.retry_condition = Some(condition);
        self
    }

    /// Check whether an error should be retried.
    pub fn should_retry(&self, error: &TranslationError) -> bool {
        match self.retry_condition {
            Some(condition) => condition(error),
            None => error.is_retryable(),
        }
    }
}

/// Executes an operation under a [`RetryPolicy`].
pub struct RetryExecutor {
    policy: RetryPolicy,
}

impl RetryExecutor {
    pub const fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Run `operation` until it succeeds, fails terminally, or the attempt
    /// budget is spent. The operation receives the zero-based attempt index.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, TranslationError>
    where
        F: FnMut(u32) -> Fut,
        Fut: std::future::Future<Output = Result<T, TranslationError>>,
    {
        let mut attempt = 0;
        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    if !self.policy.should_retry(&error) {
                        return Err(error);
                    }

                    attempt += 1;
                    if attempt > self.policy.max_retries {
                        return Err(TranslationError::RetriesExhausted {
                            attempts: attempt,
                            last_error: error.to_string(),
                        });
                    }

                    tracing::warn!(
                        target: "transml::retry",
                        attempt,
                        backoff_ms = self.policy.backoff.as_millis() as u64,
                        error = %error,
                        "attempt failed, backing off before retry"
                    );
                    sleep(self.policy.backoff).await;
                }
            }
        }
    }
}
