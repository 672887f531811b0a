//! Trait definitions for external interactions
//!
//! These traits define the boundary between the review engine and
//! infrastructure. Implementations live in other crates.

use crate::chat::ChatMessage;

/// Capability interface for the hosted completion service.
///
/// Implemented by the infrastructure layer (`faircheck-llm`) against the
/// real service, and by a mock in tests so the engine never needs network
/// access. Any remote grounding configuration (search index, credentials)
/// is provider construction state, not part of this call.
#[allow(async_fn_in_trait)]
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error;

    /// Send a message sequence and return the candidate completion texts,
    /// in the order the service produced them.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Vec<String>, Self::Error>;
}
