//! Core ReviewEngine implementation

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::{prompt, retrieval};
use faircheck_domain::{CompletionProvider, Corpus, MatchResult, Query};
use tokio::time::timeout;
use tracing::{debug, info};

/// The review engine: retrieval-grounded answer generation over an
/// immutable corpus snapshot.
///
/// One submission triggers one retrieval pass followed by one blocking
/// generation call. There is no shared mutable state between submissions;
/// the corpus is loaded once at construction and never refreshed — build a
/// new engine to observe changed data files.
pub struct ReviewEngine<P>
where
    P: CompletionProvider,
{
    corpus: Corpus,
    provider: P,
    config: EngineConfig,
}

/// Result of a full review: the generated ruling plus the local grounding
/// it was given.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    /// Generated ruling text, verbatim from the first candidate
    pub answer: String,

    /// Statutes and cases the local filter matched (possibly empty)
    pub matches: MatchResult,
}

impl<P> ReviewEngine<P>
where
    P: CompletionProvider,
    P::Error: std::fmt::Display,
{
    /// Create a new engine over a loaded corpus.
    pub fn new(corpus: Corpus, provider: P, config: EngineConfig) -> Self {
        Self {
            corpus,
            provider,
            config,
        }
    }

    /// The corpus snapshot this engine serves.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Run the retrieval filter for one query.
    pub fn retrieve(&self, query: &Query) -> MatchResult {
        retrieval::retrieve(&self.corpus, query)
    }

    /// Retrieve grounding for the query, then generate the ruling.
    pub async fn review(&self, query: &Query) -> Result<ReviewOutcome, EngineError> {
        let matches = self.retrieve(query);
        info!(
            "Retrieved {} statute(s), {} case(s) for submission ({} chars)",
            matches.statutes.len(),
            matches.cases.len(),
            query.text.len()
        );

        let answer = self.generate(&query.text, &matches).await?;
        Ok(ReviewOutcome { answer, matches })
    }

    /// Generate a ruling for already-retrieved matches.
    ///
    /// Zero matches still generates: the prompt carries explicit "없음"
    /// placeholders and any remote grounding the provider is configured
    /// with still applies.
    pub async fn generate(
        &self,
        text: &str,
        matches: &MatchResult,
    ) -> Result<String, EngineError> {
        let messages = prompt::build_messages(text, matches);
        debug!(
            "Prompt assembled: {} chars",
            messages.iter().map(|m| m.content.len()).sum::<usize>()
        );

        let candidates = timeout(
            self.config.completion_timeout(),
            self.provider.complete(&messages),
        )
        .await
        .map_err(|_| EngineError::Timeout)?
        .map_err(|e| EngineError::Completion(e.to_string()))?;

        candidates
            .into_iter()
            .next()
            .ok_or(EngineError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faircheck_domain::{CaseRecord, ChatMessage, StatuteRecord};
    use faircheck_llm::MockProvider;
    use std::time::Duration;

    fn sample_corpus() -> Corpus {
        Corpus::new(
            vec![StatuteRecord {
                title: "독점규제법 제3조".to_string(),
                text: "시장지배적 지위의 남용을 금지한다".to_string(),
                extra: serde_json::Map::new(),
            }],
            vec![CaseRecord {
                title: "사례 1".to_string(),
                summary: "시장지배적 사업자의 요금 인상 건".to_string(),
                outcome: "시정명령".to_string(),
                tags: vec!["요금제/부가서비스 출시".to_string()],
            }],
        )
    }

    fn engine_with(provider: MockProvider) -> ReviewEngine<MockProvider> {
        ReviewEngine::new(sample_corpus(), provider, EngineConfig::default())
    }

    #[tokio::test]
    async fn test_review_grounds_and_answers() {
        let mut provider = MockProvider::new("default");
        provider.add_response("독점규제법 제3조", "독점규제법 제3조에 따라 보완 필요");
        let engine = engine_with(provider);

        let query = Query::uncategorized("시장지배적 사업자의 요금 인상");
        let outcome = engine.review(&query).await.unwrap();

        assert_eq!(outcome.answer, "독점규제법 제3조에 따라 보완 필요");
        assert_eq!(outcome.matches.statutes.len(), 1);
        assert_eq!(outcome.matches.cases.len(), 1);
    }

    #[tokio::test]
    async fn test_zero_matches_still_generates() {
        let provider = MockProvider::new("법령 근거 없이 판단한 결과");
        let engine = engine_with(provider.clone());

        // No token overlaps with the corpus
        let query = Query::uncategorized("환불 정책 변경");
        let outcome = engine.review(&query).await.unwrap();

        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.answer, "법령 근거 없이 판단한 결과");
        // The provider was actually invoked
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_zero_match_prompt_carries_placeholders() {
        let mut provider = MockProvider::new("default");
        provider.add_response("관련 법령:\n없음", "placeholder seen");
        let engine = engine_with(provider);

        let query = Query::uncategorized("환불 정책 변경");
        let outcome = engine.review(&query).await.unwrap();
        assert_eq!(outcome.answer, "placeholder seen");
    }

    /// Provider that never answers within any reasonable deadline.
    struct SlowProvider;

    impl CompletionProvider for SlowProvider {
        type Error = String;

        async fn complete(&self, _messages: &[ChatMessage]) -> Result<Vec<String>, Self::Error> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec!["늦은 답변".to_string()])
        }
    }

    /// Provider that succeeds but produces no candidates.
    struct SilentProvider;

    impl CompletionProvider for SilentProvider {
        type Error = String;

        async fn complete(&self, _messages: &[ChatMessage]) -> Result<Vec<String>, Self::Error> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_slow_provider_surfaces_timeout() {
        let config = EngineConfig {
            completion_timeout_secs: 1,
        };
        let engine = ReviewEngine::new(sample_corpus(), SlowProvider, config);

        let result = engine.review(&Query::uncategorized("시장지배적 요금")).await;
        assert!(matches!(result, Err(EngineError::Timeout)));
    }

    #[tokio::test]
    async fn test_empty_candidate_list_is_an_error() {
        let engine = ReviewEngine::new(sample_corpus(), SilentProvider, EngineConfig::default());

        let result = engine.review(&Query::uncategorized("시장지배적 요금")).await;
        assert!(matches!(result, Err(EngineError::EmptyCompletion)));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let mut provider = MockProvider::new("unused");
        provider.fail_all();
        let engine = engine_with(provider);

        let query = Query::uncategorized("시장지배적 요금");
        let result = engine.review(&query).await;
        assert!(matches!(result, Err(EngineError::Completion(_))));
    }

    #[tokio::test]
    async fn test_category_flows_through_review() {
        let provider = MockProvider::new("답변");
        let engine = engine_with(provider);

        let query = Query::new("요금 인상", Some("표시광고".to_string()));
        let outcome = engine.review(&query).await.unwrap();

        // The summary overlaps but the tag does not
        assert!(outcome.matches.cases.is_empty());
        assert_eq!(outcome.matches.statutes.len(), 0);
    }

    #[tokio::test]
    async fn test_retrieve_does_not_call_provider() {
        let provider = MockProvider::new("답변");
        let engine = engine_with(provider.clone());

        let query = Query::uncategorized("시장지배적 요금");
        let matches = engine.retrieve(&query);
        assert!(!matches.is_empty());
        assert_eq!(provider.call_count(), 0);
    }
}
