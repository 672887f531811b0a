//! Corpus record types
//!
//! These mirror the shapes of the two corpus data files (`laws.json` and
//! `cases.json`). Records are immutable once loaded; the corpus lives for
//! the lifetime of the engine that loaded it.

use serde::{Deserialize, Serialize};

/// A single statute entry from the statute corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatuteRecord {
    /// Statute title, e.g. "독점규제법 제3조"
    pub title: String,

    /// Statute body text used for keyword matching
    pub text: String,

    /// Any additional metadata fields present in the source file are
    /// carried through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single precedent case from the case corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Case title
    pub title: String,

    /// Case summary used for keyword matching
    pub summary: String,

    /// Ruling outcome, rendered alongside the summary in the prompt
    pub outcome: String,

    /// Category tags; a missing field in the source file means no tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CaseRecord {
    /// Whether this case carries the given category tag (exact match,
    /// case-sensitive, no normalization).
    pub fn has_tag(&self, category: &str) -> bool {
        self.tags.iter().any(|t| t == category)
    }
}

/// The loaded corpus: statutes and precedent cases, in file order.
///
/// Loaded once per engine instantiation and read-only thereafter. A missing
/// or malformed source file yields an empty sequence, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    /// Statute entries in source-file order
    pub statutes: Vec<StatuteRecord>,

    /// Precedent cases in source-file order
    pub cases: Vec<CaseRecord>,
}

impl Corpus {
    /// Create a corpus from already-loaded record sequences.
    pub fn new(statutes: Vec<StatuteRecord>, cases: Vec<CaseRecord>) -> Self {
        Self { statutes, cases }
    }

    /// True when both collections are empty (e.g. no data files were found).
    pub fn is_empty(&self) -> bool {
        self.statutes.is_empty() && self.cases.is_empty()
    }
}
