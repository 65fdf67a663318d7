//! Data models for extracted articles and run summaries.
//!
//! [`ArticleRecord`] is the only artifact the pipeline hands to callers.
//! Absent fields are data, not failures: an article whose headline or body
//! could not be located still produces a record, so downstream consumers
//! can see exactly which URLs yielded partial extractions.

use serde::Serialize;

/// The normalized extraction result for one article URL.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleRecord {
    /// The absolute URL the article was fetched from.
    pub source_url: String,
    /// Headline text, absent when no heading element was found.
    pub headline: Option<String>,
    /// Cleaned body text, absent when no matching body container was found.
    pub body: Option<String>,
}

impl ArticleRecord {
    /// True when neither headline nor body could be extracted.
    pub fn is_empty(&self) -> bool {
        self.headline.is_none() && self.body.is_none()
    }
}

/// The result of one pipeline run: the ordered record sequence plus
/// skip/failure counts, so callers can tell a quiet news day from a
/// half-broken one.
#[derive(Debug, Serialize)]
pub struct RunOutcome {
    /// Records in discovery order: topic selection order, then document
    /// order of the links within each topic page.
    pub records: Vec<ArticleRecord>,
    /// Article URLs discovered across all topic pages.
    pub discovered: usize,
    /// Article URLs whose fetch failed and were skipped.
    pub failed: usize,
}
