//! FairCheck Review Engine
//!
//! Retrieval-grounded answer engine for fair-competition pre-review
//! submissions.
//!
//! # Architecture
//!
//! ```text
//! Submission text ─┐
//!                  ├─ retrieve ─ MatchResult ─ prompt ─ CompletionProvider ─ answer
//! Corpus (loaded once) ─┘
//! ```
//!
//! The engine loads the statute and precedent corpora once at construction,
//! filters them per request by token overlap (and exact category tag when
//! one is given), renders the matches into a grounded two-message prompt,
//! and delegates generation to a [`CompletionProvider`]. Zero matches is a
//! valid outcome: the prompt then carries explicit "없음" placeholders and
//! generation still runs. Only completion-service failures surface as
//! errors.
//!
//! # Example Usage
//!
//! ```no_run
//! use faircheck_domain::Query;
//! use faircheck_engine::{corpus, EngineConfig, ReviewEngine};
//! use faircheck_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let corpus = corpus::load_corpus("data");
//! let provider = MockProvider::new("심의 결과: 적합");
//! let engine = ReviewEngine::new(corpus, provider, EngineConfig::default());
//!
//! let query = Query::new("시장지배적 사업자의 요금 인상", Some("요금제/부가서비스 출시".into()));
//! let outcome = engine.review(&query).await?;
//! println!("{}", outcome.answer);
//! # Ok(())
//! # }
//! ```
//!
//! [`CompletionProvider`]: faircheck_domain::CompletionProvider

#![warn(missing_docs)]

mod config;
mod engine;
mod error;

pub mod corpus;
pub mod prompt;
pub mod retrieval;

pub use config::EngineConfig;
pub use engine::{ReviewEngine, ReviewOutcome};
pub use error::EngineError;
