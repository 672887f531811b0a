//! Azure OpenAI Provider Implementation
//!
//! Talks to an Azure OpenAI chat-completions deployment over HTTPS. When a
//! [`SearchGrounding`] is configured, the request carries the Azure AI
//! Search `data_sources` extension so the service performs its own semantic
//! retrieval against a remote index. That remote grounding is independent of
//! the engine's local keyword filter; this provider only forwards the
//! configuration, it never inspects the index.
//!
//! # Features
//!
//! - Async HTTP communication with the deployment API
//! - Configurable endpoint, deployment, api-version, and request timeout
//! - Retry logic with exponential backoff
//! - Optional remote search grounding

use crate::CompletionError;
use faircheck_domain::{ChatMessage, CompletionProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default API version for the chat-completions deployment API
pub const DEFAULT_API_VERSION: &str = "2024-12-01-preview";

/// Default timeout for completion requests (90 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Remote search-index grounding configuration.
///
/// Passed through to the completion service verbatim; the engine does not
/// need to know how the index was built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchGrounding {
    /// Search service endpoint
    pub endpoint: String,

    /// Name of the index to query
    pub index_name: String,

    /// API key for the search service
    pub api_key: String,

    /// Embedding deployment used to vectorize the query against the index
    pub embedding_deployment: String,
}

/// Azure OpenAI chat-completions provider.
pub struct AzureOpenAiProvider {
    endpoint: String,
    deployment: String,
    api_key: String,
    api_version: String,
    grounding: Option<SearchGrounding>,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionsRequest<'a> {
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    data_sources: Option<Vec<DataSource>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DataSource {
    AzureSearch { parameters: AzureSearchParameters },
}

#[derive(Serialize)]
struct AzureSearchParameters {
    endpoint: String,
    index_name: String,
    authentication: SearchAuthentication,
    query_type: &'static str,
    embedding_dependency: EmbeddingDependency,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SearchAuthentication {
    ApiKey { key: String },
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum EmbeddingDependency {
    DeploymentName { deployment_name: String },
}

impl From<&SearchGrounding> for DataSource {
    fn from(grounding: &SearchGrounding) -> Self {
        DataSource::AzureSearch {
            parameters: AzureSearchParameters {
                endpoint: grounding.endpoint.clone(),
                index_name: grounding.index_name.clone(),
                authentication: SearchAuthentication::ApiKey {
                    key: grounding.api_key.clone(),
                },
                query_type: "simple",
                embedding_dependency: EmbeddingDependency::DeploymentName {
                    deployment_name: grounding.embedding_deployment.clone(),
                },
            },
        }
    }
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl AzureOpenAiProvider {
    /// Create a new provider.
    ///
    /// # Parameters
    ///
    /// - `endpoint`: resource endpoint, e.g. "https://my-resource.openai.azure.com"
    /// - `api_key`: API key for the resource
    /// - `deployment`: chat model deployment name
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        Self::with_timeout(
            endpoint,
            api_key,
            deployment,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a new provider with an explicit request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        deployment: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            endpoint: endpoint.into(),
            deployment: deployment.into(),
            api_key: api_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            grounding: None,
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Override the API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Attach a remote search grounding source.
    pub fn with_grounding(mut self, grounding: SearchGrounding) -> Self {
        self.grounding = Some(grounding);
        self
    }

    /// Set the maximum number of retry attempts.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn request_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }

    /// Send a completion request and return the candidate texts.
    ///
    /// # Errors
    ///
    /// - `Auth` on 401/403 (not retried)
    /// - `DeploymentNotAvailable` on 404 (not retried)
    /// - `RateLimited` on 429, `Communication` on other failures — both
    ///   retried with exponential backoff up to the configured limit
    /// - `InvalidResponse` when the body cannot be parsed
    pub async fn send(&self, messages: &[ChatMessage]) -> Result<Vec<String>, CompletionError> {
        let url = self.request_url();

        let request_body = ChatCompletionsRequest {
            messages,
            data_sources: self.grounding.as_ref().map(|g| vec![g.into()]),
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .header("api-key", &self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body: ChatCompletionsResponse =
                            response.json().await.map_err(|e| {
                                CompletionError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                ))
                            })?;
                        let candidates: Vec<String> = body
                            .choices
                            .into_iter()
                            .filter_map(|c| c.message.content)
                            .collect();
                        debug!("Completion returned {} candidate(s)", candidates.len());
                        return Ok(candidates);
                    } else if status == reqwest::StatusCode::UNAUTHORIZED
                        || status == reqwest::StatusCode::FORBIDDEN
                    {
                        return Err(CompletionError::Auth(format!("HTTP {}", status)));
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(CompletionError::DeploymentNotAvailable(
                            self.deployment.clone(),
                        ));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        warn!("Completion service rate limited (attempt {})", attempts + 1);
                        last_error = Some(CompletionError::RateLimited);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(CompletionError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(CompletionError::Communication(format!(
                        "Request failed: {}",
                        e
                    )));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| CompletionError::Communication("Max retries exceeded".to_string())))
    }
}

impl CompletionProvider for AzureOpenAiProvider {
    type Error = CompletionError;

    async fn complete(&self, messages: &[ChatMessage]) -> Result<Vec<String>, Self::Error> {
        self.send(messages).await
    }
}
