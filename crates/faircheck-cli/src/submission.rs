//! Submission assembly and validation.
//!
//! Mirrors the form layer's contract: every required field must be present
//! and non-blank before the engine is invoked. Category and service are real
//! enums, so the "unselected" placeholder state of the original form cannot
//! be represented here at all.

use crate::cli::{Category, Service};
use crate::error::{CliError, Result};
use faircheck_domain::Query;

/// A validated pre-review submission.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Submission title
    pub title: String,

    /// Review category
    pub category: Category,

    /// Service the submission concerns
    pub service: Service,

    /// Free-text submission content
    pub content: String,
}

impl Submission {
    /// Build and validate a submission. Fails with a field-specific error
    /// on the first blank required field.
    pub fn new(
        title: impl Into<String>,
        category: Category,
        service: Service,
        content: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        let content = content.into();

        if title.trim().is_empty() {
            return Err(CliError::Validation {
                field: "title",
                reason: "title must not be empty".to_string(),
            });
        }
        if content.trim().is_empty() {
            return Err(CliError::Validation {
                field: "content",
                reason: "content must not be empty".to_string(),
            });
        }

        Ok(Self {
            title,
            category,
            service,
            content,
        })
    }

    /// The retrieval query for this submission: its content plus the
    /// category's corpus tag.
    pub fn query(&self) -> Query {
        Query::new(self.content.clone(), Some(self.category.tag().to_string()))
    }
}
