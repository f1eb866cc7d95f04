//! The retrying translation client.

use tokio::time::sleep;

use crate::error::TranslationError;
use crate::pacing::RatePacing;
use crate::prompt;
use crate::provider::{Provider, ProviderEndpoint};
use crate::retry::{RetryExecutor, RetryPolicy};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, TranslationRequest};

const TEMPERATURE: f32 = 0.3;

/// Translates text snippets through a chat-completion endpoint, pacing and
/// retrying each call.
///
/// The client is cheap to clone; concurrent calls share the underlying
/// connection pool but are otherwise independent — each call owns its own
/// pacing delay and retry state, with no cross-call rate coordination.
///
/// # Example
///
/// ```rust,ignore
/// use transml::{ProviderConfig, TranslationClient, TranslationRequest};
///
/// let provider = config.resolve()?;
/// let client = TranslationClient::new();
/// let request = TranslationRequest::new("Hello", "English", "French");
/// let translated = client.translate(&request, &provider).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranslationClient {
    http: reqwest::Client,
    pacing: RatePacing,
    retry: RetryPolicy,
}

impl TranslationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a pre-built HTTP client (shared pools, custom TLS, proxies).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Override the per-attempt pacing.
    pub fn with_pacing(mut self, pacing: RatePacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Override the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Translate `request.text` from the source to the target language.
    ///
    /// Returns the trimmed model output, or `Ok(None)` when the upstream
    /// response carried no usable content — the caller decides its own
    /// fallback for that case. Transient upstream failures are retried per
    /// the configured [`RetryPolicy`]; the terminal error reports the total
    /// attempt count and the last underlying failure.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
        provider: &Provider,
    ) -> Result<Option<String>, TranslationError> {
        let system_prompt = prompt::system_prompt(
            provider.prompt_template.as_deref(),
            &request.source_language,
            &request.target_language,
            &request.text,
        );
        let user_prompt = prompt::user_prompt(
            &request.text,
            &request.source_language,
            &request.target_language,
        );

        let pacing_delay = self.pacing.delay();
        let executor = RetryExecutor::new(self.retry.clone());
        let endpoint = &provider.endpoint;
        let system_prompt = &system_prompt;
        let user_prompt = &user_prompt;

        executor
            .execute(|attempt| async move {
                sleep(pacing_delay).await;

                tracing::debug!(
                    target: "transml::client",
                    attempt = attempt + 1,
                    system_prompt = %system_prompt,
                    user_prompt = %user_prompt,
                    "sending translation request"
                );

                let result = self
                    .request_completion(endpoint, system_prompt, user_prompt)
                    .await?;

                tracing::debug!(
                    target: "transml::client",
                    attempt = attempt + 1,
                    result = result.as_deref().unwrap_or("<no content>"),
                    "translation response received"
                );

                Ok(result)
            })
            .await
            .inspect_err(|error| {
                tracing::error!(target: "transml::client", %error, "translation failed");
            })
    }

    async fn request_completion(
        &self,
        endpoint: &ProviderEndpoint,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Option<String>, TranslationError> {
        let body = ChatCompletionRequest {
            model: endpoint.model_field(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            temperature: TEMPERATURE,
        };

        let response = endpoint
            .apply_auth(self.http.post(endpoint.request_url()))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::from_status(status.as_u16(), message));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        Ok(completion
            .first_content()
            .map(|content| content.trim().to_string()))
    }
}
