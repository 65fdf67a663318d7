//! Per-publisher article extraction.
//!
//! Every publisher styles its article pages differently, but extraction is
//! the same algorithm everywhere: headline = text of the first `<h1>`,
//! body = text of the first container whose class attribute carries the
//! publisher's marker substrings. [`Publisher`] captures the per-site
//! differences as plain configuration, so adding a publisher never means
//! touching the shared logic.
//!
//! Both extraction steps fail softly. A page with no `<h1>` or no matching
//! body container still yields a record, with the missing field absent and
//! a warning emitted, since that usually means the publisher shipped new
//! markup rather than that anything here went wrong.

use crate::dom;
use crate::error::FetchError;
use crate::fetcher::PageFetcher;
use crate::models::ArticleRecord;
use scraper::Html;
use tracing::{debug, instrument, warn};
use url::Url;

/// The fixed structural-matching rules for one publisher.
#[derive(Debug, Clone)]
pub struct Publisher {
    /// Short identifier used in log events.
    pub name: &'static str,
    base: Url,
    /// Class substrings that mark the headline-cards container on a topic
    /// page.
    headline_container_classes: &'static [&'static str],
    /// Class substrings that mark the article-body container.
    body_classes: &'static [&'static str],
}

impl Publisher {
    pub fn new(
        name: &'static str,
        base: &str,
        headline_container_classes: &'static [&'static str],
        body_classes: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            base: Url::parse(base).expect("static publisher base URL"),
            headline_container_classes,
            body_classes,
        }
    }

    pub fn cnn() -> Self {
        Self::new(
            "cnn",
            "https://www.cnn.com",
            &["lead-plus-headlines", "cards-wrapper"],
            &["article", "content"],
        )
    }

    pub fn apnews() -> Self {
        Self::new(
            "apnews",
            "https://apnews.com",
            &["PageList", "content"],
            &["RichTextBody"],
        )
    }

    pub fn headline_container_classes(&self) -> &'static [&'static str] {
        self.headline_container_classes
    }

    /// Resolve a discovered href to an absolute article URL.
    ///
    /// Relative hrefs are joined onto the publisher base origin; hrefs
    /// that already carry a scheme pass through unchanged.
    pub fn resolve_href(&self, href: &str) -> Option<Url> {
        self.base.join(href).ok()
    }
}

/// Extracts normalized article records using one publisher's rules.
#[derive(Debug)]
pub struct ArticleExtractor<'a> {
    fetcher: &'a PageFetcher,
    publisher: &'a Publisher,
}

impl<'a> ArticleExtractor<'a> {
    pub fn new(fetcher: &'a PageFetcher, publisher: &'a Publisher) -> Self {
        Self { fetcher, publisher }
    }

    /// Fetch one article page and extract its record.
    ///
    /// Fetch failures propagate so the caller can count and isolate them;
    /// structural misses do not.
    #[instrument(level = "debug", skip(self), fields(publisher = self.publisher.name))]
    pub async fn extract(&self, url: &Url) -> Result<ArticleRecord, FetchError> {
        let document = self.fetcher.fetch(url.as_str()).await?;
        Ok(self.extract_from_document(url, &document))
    }

    /// The structural half of extraction, separated from fetching.
    pub fn extract_from_document(&self, url: &Url, document: &Html) -> ArticleRecord {
        let headline = dom::first_element(document, "h1")
            .map(dom::normalized_text)
            .filter(|text| !text.is_empty());
        if headline.is_none() {
            warn!(publisher = self.publisher.name, %url, "No headline element found; markup may have drifted");
        }

        let body = dom::first_with_classes(document, "div", self.publisher.body_classes)
            .map(dom::normalized_text)
            .filter(|text| !text.is_empty());
        if body.is_none() {
            warn!(
                publisher = self.publisher.name,
                %url,
                required = ?self.publisher.body_classes,
                "No body container matched; markup may have drifted"
            );
        }

        debug!(
            has_headline = headline.is_some(),
            body_bytes = body.as_deref().map(str::len).unwrap_or(0),
            "Extracted article"
        );
        ArticleRecord {
            source_url: url.to_string(),
            headline,
            body,
        }
    }
}
