//! Provider configuration and endpoint resolution.
//!
//! A [`ProviderConfig`] is the raw record a host application stores for an
//! upstream backend. Resolution happens once, up front: the `id` tag selects
//! between a generic OpenAI-compatible endpoint and an Azure deployment
//! endpoint, and a malformed Azure URL is rejected as a configuration error
//! instead of surfacing later inside the request loop.

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::TranslationError;

/// Model used for generic providers when the record names none.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Azure API version used when the endpoint URL carries no `api-version`.
pub const DEFAULT_AZURE_API_VERSION: &str = "2023-05-15";

/// Provider record as stored by a host application.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// `"azure"` selects the Azure request path; anything else is generic.
    pub id: String,
    pub api_url: String,
    pub api_key: SecretString,
    #[serde(default)]
    pub model_name: Option<String>,
    /// Optional system-prompt template with `{{sourceLanguage}}`,
    /// `{{targetLanguage}}` and `{{content}}` placeholders.
    #[serde(default)]
    pub prompt: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("id", &self.id)
            .field("api_url", &self.api_url)
            .field("model_name", &self.model_name)
            .field("has_prompt", &self.prompt.is_some())
            .finish()
    }
}

impl ProviderConfig {
    /// Resolve the record into a concrete request shape.
    ///
    /// Exactly one endpoint variant is produced per record, selected solely
    /// by `id`.
    pub fn resolve(&self) -> Result<Provider, TranslationError> {
        let endpoint = if self.id == "azure" {
            resolve_azure_endpoint(&self.api_url, self.api_key.clone())?
        } else {
            ProviderEndpoint::OpenAiCompatible {
                api_url: self.api_url.clone(),
                api_key: self.api_key.clone(),
                model: self
                    .model_name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            }
        };

        Ok(Provider {
            endpoint,
            prompt_template: self.prompt.clone(),
        })
    }
}

/// A provider resolved to a concrete endpoint plus its prompt template.
#[derive(Debug, Clone)]
pub struct Provider {
    pub endpoint: ProviderEndpoint,
    pub prompt_template: Option<String>,
}

/// Where and how a chat-completion request is sent.
#[derive(Clone)]
pub enum ProviderEndpoint {
    /// Generic OpenAI-compatible endpoint. The request is sent to exactly
    /// `api_url`, with no path rewriting.
    OpenAiCompatible {
        api_url: String,
        api_key: SecretString,
        model: String,
    },
    /// Azure deployment endpoint. The deployment in the URL path selects
    /// the model.
    Azure {
        /// `{scheme}://{host}/`, path and query dropped.
        endpoint: String,
        api_key: SecretString,
        deployment: String,
        api_version: String,
    },
}

impl std::fmt::Debug for ProviderEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAiCompatible { api_url, model, .. } => f
                .debug_struct("OpenAiCompatible")
                .field("api_url", api_url)
                .field("model", model)
                .finish(),
            Self::Azure {
                endpoint,
                deployment,
                api_version,
                ..
            } => f
                .debug_struct("Azure")
                .field("endpoint", endpoint)
                .field("deployment", deployment)
                .field("api_version", api_version)
                .finish(),
        }
    }
}

impl ProviderEndpoint {
    /// The URL the chat-completion request is posted to.
    pub fn request_url(&self) -> String {
        match self {
            Self::OpenAiCompatible { api_url, .. } => api_url.clone(),
            Self::Azure {
                endpoint,
                deployment,
                api_version,
                ..
            } => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint.trim_end_matches('/'),
                deployment,
                api_version
            ),
        }
    }

    /// The `model` body field for this endpoint, if it carries one.
    pub fn model_field(&self) -> Option<String> {
        match self {
            Self::OpenAiCompatible { model, .. } => Some(model.clone()),
            Self::Azure { .. } => None,
        }
    }

    /// Attach the endpoint's authentication to an outgoing request.
    pub(crate) fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::OpenAiCompatible { api_key, .. } => request.header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", api_key.expose_secret()),
            ),
            Self::Azure { api_key, .. } => request.header("api-key", api_key.expose_secret()),
        }
    }
}

fn resolve_azure_endpoint(
    api_url: &str,
    api_key: SecretString,
) -> Result<ProviderEndpoint, TranslationError> {
    let url = Url::parse(api_url).map_err(|e| {
        TranslationError::InvalidConfiguration(format!("malformed Azure endpoint URL: {e}"))
    })?;

    let deployment = url
        .path_segments()
        .and_then(|mut segments| {
            segments
                .find(|segment| *segment == "deployments")
                .and_then(|_| segments.next())
        })
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| {
            TranslationError::InvalidConfiguration(
                "Azure endpoint URL has no deployment path segment".to_string(),
            )
        })?
        .to_string();

    let api_version = url
        .query_pairs()
        .find(|(key, _)| key == "api-version")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string());

    let host = url.host_str().ok_or_else(|| {
        TranslationError::InvalidConfiguration("Azure endpoint URL has no host".to_string())
    })?;
    let endpoint = match url.port() {
        Some(port) => format!("{}://{}:{}/", url.scheme(), host, port),
        None => format!("{}://{}/", url.scheme(), host),
    };

    Ok(ProviderEndpoint::Azure {
        endpoint,
        api_key,
        deployment,
        api_version,
    })
}
