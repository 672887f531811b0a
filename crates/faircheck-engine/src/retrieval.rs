//! Keyword retrieval filter
//!
//! Selects the statutes and cases shown to the model. Deliberately exact:
//! lowercase whitespace tokens tested for substring containment, no
//! stemming, no stopwords, no scoring. This keeps the local grounding step
//! deterministic and debuggable; broader semantic recall comes from the
//! remote search index attached at the completion layer.

use faircheck_domain::{Corpus, MatchResult, Query};

/// Tokenize query text: lowercase, split on whitespace.
///
/// Duplicates and order are irrelevant downstream since only membership is
/// tested.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn any_token_in(tokens: &[String], haystack: &str) -> bool {
    let haystack = haystack.to_lowercase();
    tokens.iter().any(|t| haystack.contains(t.as_str()))
}

/// Filter the corpus by token overlap and category tag.
///
/// A statute matches when any query token appears as a substring of its
/// lowercased text. A case matches when any token appears as a substring of
/// its lowercased summary and, if the query carries a category, the case is
/// tagged with that category exactly. Results keep corpus order; there is no
/// cap.
///
/// Empty query text produces zero tokens and therefore zero matches for
/// both collections — an empty submission retrieves nothing rather than
/// everything.
pub fn retrieve(corpus: &Corpus, query: &Query) -> MatchResult {
    let tokens = tokenize(&query.text);

    let statutes = corpus
        .statutes
        .iter()
        .filter(|law| any_token_in(&tokens, &law.text))
        .cloned()
        .collect();

    let cases = corpus
        .cases
        .iter()
        .filter(|case| {
            let summary_hit = any_token_in(&tokens, &case.summary);
            match &query.category {
                Some(category) => summary_hit && case.has_tag(category),
                None => summary_hit,
            }
        })
        .cloned()
        .collect();

    MatchResult { statutes, cases }
}
