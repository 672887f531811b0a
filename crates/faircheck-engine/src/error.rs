//! Error types for the review engine

use thiserror::Error;

/// Errors that can occur during review.
///
/// Corpus-load failures never appear here: a missing or malformed corpus
/// file degrades to an empty collection inside the loader. Zero retrieval
/// matches is not an error either. Everything below means the completion
/// service itself failed, which callers must report distinctly from "no
/// grounding found".
#[derive(Error, Debug)]
pub enum EngineError {
    /// Completion-service failure (network, auth, quota, malformed body)
    #[error("Completion service error: {0}")]
    Completion(String),

    /// The completion call exceeded the configured deadline
    #[error("Completion timed out")]
    Timeout,

    /// The service answered but produced no candidates
    #[error("Completion service returned no candidates")]
    EmptyCompletion,
}
