//! FairCheck Domain Layer
//!
//! Core types and trait seams for the fair-competition pre-review engine.
//! All other crates in the workspace depend on this one; it depends only on
//! serde, because the record types are the shapes of the corpus data files.
//!
//! ## Key Concepts
//!
//! - **StatuteRecord / CaseRecord**: immutable corpus entries loaded once at
//!   engine construction
//! - **Query**: one submission's free text plus an optional review category
//! - **MatchResult**: the statutes and precedents retained by the keyword
//!   filter, in original corpus order
//! - **ChatMessage**: role/content pairs sent to the completion service
//! - **CompletionProvider**: the capability seam for the hosted language
//!   model, so the engine can run against a stub in tests

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod query;
pub mod records;
pub mod traits;

// Re-exports for convenience
pub use chat::{ChatMessage, Role};
pub use query::{MatchResult, Query};
pub use records::{CaseRecord, Corpus, StatuteRecord};
pub use traits::CompletionProvider;
