//! transml
//!
//! A small, retrying translation client for OpenAI-compatible and Azure
//! OpenAI chat-completion endpoints, plus the status projection a host
//! application renders per translated file.
//!
//! A provider record is resolved once into a concrete endpoint shape
//! (generic vs. Azure deployment), then each [`TranslationClient::translate`]
//! call paces itself, issues a two-message chat completion, and retries
//! transient upstream failures with a fixed backoff.
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod pacing;
pub mod prompt;
pub mod provider;
pub mod retry;
pub mod status;
pub mod types;

pub use client::TranslationClient;
pub use error::TranslationError;
pub use pacing::RatePacing;
pub use provider::{Provider, ProviderConfig, ProviderEndpoint};
pub use retry::RetryPolicy;
pub use status::{StatusGlyph, TaskStatus};
pub use types::TranslationRequest;
