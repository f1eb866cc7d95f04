//! Error types for the translation client.
//!
//! Errors are split into three broad classes: configuration errors (never
//! retried), transient upstream errors (retried), and terminal exhaustion
//! (surfaced to the caller after the attempt budget is spent).

use thiserror::Error;

/// Errors produced while resolving a provider or translating text.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The provider record cannot be turned into a usable endpoint.
    #[error("invalid provider configuration: {0}")]
    InvalidConfiguration(String),

    /// Transport-level failure before an HTTP status was received.
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream API rejected the request with an error status.
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The upstream API rejected the credentials.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The response body did not parse as a chat completion.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// All attempts were spent without a successful response.
    #[error("translation failed after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

impl TranslationError {
    /// Map a non-success HTTP status to the matching error variant.
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Authentication(message),
            _ => Self::Api { status, message },
        }
    }

    /// Whether another attempt against the upstream could plausibly succeed.
    ///
    /// Configuration and authentication failures are deterministic, so
    /// retrying them only wastes the attempt budget. Everything that reached
    /// the network is treated as transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::InvalidConfiguration(_) | Self::Authentication(_) => false,
            Self::Http(_) | Self::InvalidResponse(_) => true,
            // Timeouts, rate limiting, and server errors; other 4xx are
            // deterministic rejections.
            Self::Api { status, .. } => matches!(*status, 408 | 429) || *status >= 500,
            Self::RetriesExhausted { .. } => false,
        }
    }
}
