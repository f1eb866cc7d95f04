//! Per-attempt request pacing.

use std::time::Duration;

/// Static delay applied before each attempt, derived from a
/// requests-per-minute ceiling and discounted by the time assumed already
/// spent waiting on the previous response.
///
/// The delay is computed per call and does not track elapsed time across
/// calls, so back-to-back or concurrent calls are not guaranteed to stay
/// under the nominal ceiling. Callers that need an aggregate rate limit
/// must coordinate above this layer.
#[derive(Debug, Clone)]
pub struct RatePacing {
    requests_per_minute: u64,
    latency_offset: Duration,
}

impl Default for RatePacing {
    fn default() -> Self {
        Self {
            requests_per_minute: 15,
            latency_offset: Duration::from_millis(1500),
        }
    }
}

impl RatePacing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nominal requests-per-minute ceiling.
    pub const fn with_requests_per_minute(mut self, requests_per_minute: u64) -> Self {
        self.requests_per_minute = requests_per_minute;
        self
    }

    /// Set the assumed model latency already spent per request.
    pub const fn with_latency_offset(mut self, offset: Duration) -> Self {
        self.latency_offset = offset;
        self
    }

    /// The delay to sleep before an attempt.
    pub fn delay(&self) -> Duration {
        let min_interval = Duration::from_millis(60_000 / self.requests_per_minute.max(1));
        min_interval.saturating_sub(self.latency_offset)
    }
}
