//! Query and match-result types

use crate::records::{CaseRecord, StatuteRecord};

/// One retrieval request: the submission's free text plus an optional
/// review category.
///
/// The category is a real `Option`, not a sentinel string. Form layers that
/// use placeholder values ("선택" and friends) must collapse them before
/// constructing a query; [`Query::new`] additionally normalizes empty or
/// whitespace-only categories to `None` so they can never reach the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Free-form submission content
    pub text: String,

    /// Review category; when present, case matching also requires an exact
    /// tag match
    pub category: Option<String>,
}

impl Query {
    /// Create a query, normalizing a blank category to `None`.
    pub fn new(text: impl Into<String>, category: Option<String>) -> Self {
        let category = category.filter(|c| !c.trim().is_empty());
        Self {
            text: text.into(),
            category,
        }
    }

    /// Create a query with no category filter.
    pub fn uncategorized(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }
}

/// Statutes and cases retained by the retrieval filter.
///
/// Order is preserved from the corpus (stable filter); there is no scoring,
/// ranking, or result cap. Both sequences empty is a valid outcome, not an
/// error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    /// Matched statutes, in corpus order
    pub statutes: Vec<StatuteRecord>,

    /// Matched precedent cases, in corpus order
    pub cases: Vec<CaseRecord>,
}

impl MatchResult {
    /// True when neither statutes nor cases matched.
    pub fn is_empty(&self) -> bool {
        self.statutes.is_empty() && self.cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_category_becomes_none() {
        assert_eq!(Query::new("내용", None).category, None);
        assert_eq!(Query::new("내용", Some(String::new())).category, None);
        assert_eq!(Query::new("내용", Some("   ".to_string())).category, None);
        assert_eq!(
            Query::new("내용", Some("표시광고".to_string())).category,
            Some("표시광고".to_string())
        );
    }

    #[test]
    fn uncategorized_query() {
        let query = Query::uncategorized("환불 정책");
        assert_eq!(query.text, "환불 정책");
        assert!(query.category.is_none());
    }

    #[test]
    fn empty_match_result() {
        assert!(MatchResult::default().is_empty());
    }
}
