//! FairCheck Completion Provider Layer
//!
//! Implementations of the `CompletionProvider` trait from
//! `faircheck-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `AzureOpenAiProvider`: Azure OpenAI chat-completions deployment, with
//!   optional Azure AI Search grounding
//!
//! # Examples
//!
//! ```
//! use faircheck_llm::MockProvider;
//! use faircheck_domain::{ChatMessage, CompletionProvider};
//!
//! # async fn example() {
//! let provider = MockProvider::new("심의 결과: 적합");
//! let messages = [ChatMessage::user("심의 요청")];
//! let candidates = provider.complete(&messages).await.unwrap();
//! assert_eq!(candidates[0], "심의 결과: 적합");
//! # }
//! ```

#![warn(missing_docs)]

pub mod azure;

use faircheck_domain::{ChatMessage, CompletionProvider};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use azure::{AzureOpenAiProvider, SearchGrounding};

/// Errors that can occur while calling the completion service.
///
/// All of these are upstream failures, distinct from the valid "no local
/// grounding matched" outcome.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Authentication or authorization failure
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Deployment/model not found on the service
    #[error("Deployment not available: {0}")]
    DeploymentNotAvailable(String),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("Completion error: {0}")]
    Other(String),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses can be keyed by a substring of the message contents, so a test
/// can react to what the engine actually put in the prompt.
///
/// # Examples
///
/// ```
/// use faircheck_llm::MockProvider;
/// use faircheck_domain::{ChatMessage, CompletionProvider};
///
/// # async fn example() {
/// let mut provider = MockProvider::new("기본 답변");
/// provider.add_response("표시광고", "표시광고 관련 심의 결과");
///
/// let messages = [ChatMessage::user("표시광고 관련 요청")];
/// assert_eq!(
///     provider.complete(&messages).await.unwrap()[0],
///     "표시광고 관련 심의 결과"
/// );
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<Vec<(String, String)>>>,
    call_count: Arc<Mutex<usize>>,
    fail_all: Arc<Mutex<bool>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all requests
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            fail_all: Arc::new(Mutex::new(false)),
        }
    }

    /// Add a response returned when any message content contains `needle`
    pub fn add_response(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push((needle.into(), response.into()));
    }

    /// Make every subsequent call fail with a communication error
    pub fn fail_all(&mut self) {
        *self.fail_all.lock().unwrap() = true;
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    type Error = CompletionError;

    async fn complete(&self, messages: &[ChatMessage]) -> Result<Vec<String>, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if *self.fail_all.lock().unwrap() {
            return Err(CompletionError::Communication("Mock failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        for (needle, response) in responses.iter() {
            if messages.iter().any(|m| m.content.contains(needle)) {
                return Ok(vec![response.clone()]);
            }
        }

        Ok(vec![self.default_response.clone()])
    }
}
