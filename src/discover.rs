//! Trending-article link discovery on topic pages.
//!
//! For each resolved topic page, discovery fetches the page, locates the
//! headline-cards container, and collects every anchor inside it in
//! document order, resolved to absolute article URLs. Duplicate links are
//! kept; the sequence mirrors what the page itself renders.
//!
//! Failure isolation: one unfetchable topic page degrades that topic to
//! zero links and discovery moves on. Only when every topic page in the
//! batch fails does discovery itself error, because that pattern means the
//! publisher is unreachable rather than restyled.

use crate::dom;
use crate::error::DiscoveryError;
use crate::extract::Publisher;
use crate::fetcher::PageFetcher;
use crate::topics::ResolvedTopicPages;
use scraper::Html;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Article links discovered per topic, in topic resolution order.
pub type DiscoveredLinks = Vec<(String, Vec<Url>)>;

/// Discovers article links on one publisher's topic pages.
#[derive(Debug)]
pub struct ArticleLinkDiscoverer<'a> {
    fetcher: &'a PageFetcher,
    publisher: &'a Publisher,
}

impl<'a> ArticleLinkDiscoverer<'a> {
    pub fn new(fetcher: &'a PageFetcher, publisher: &'a Publisher) -> Self {
        Self { fetcher, publisher }
    }

    /// Collect article links for every resolved topic page.
    ///
    /// Always returns an entry per topic, possibly empty. Zero links is a
    /// valid result the caller interprets; unreachability of the whole
    /// publisher is not.
    #[instrument(level = "info", skip_all, fields(publisher = self.publisher.name))]
    pub async fn discover(
        &self,
        pages: &ResolvedTopicPages,
    ) -> Result<DiscoveredLinks, DiscoveryError> {
        let mut links: DiscoveredLinks = Vec::with_capacity(pages.len());
        let mut fetch_failures = 0usize;

        for (topic, page_url) in pages {
            let document = match self.fetcher.fetch(page_url.as_str()).await {
                Ok(document) => document,
                Err(e) => {
                    warn!(%topic, url = %page_url, error = %e, "Topic page fetch failed; topic yields no links");
                    fetch_failures += 1;
                    links.push((topic.clone(), Vec::new()));
                    continue;
                }
            };

            let topic_links = match self.links_in_document(&document) {
                Some(resolved) => {
                    debug!(%topic, count = resolved.len(), "Discovered article links");
                    resolved
                }
                None => {
                    warn!(
                        %topic,
                        url = %page_url,
                        required = ?self.publisher.headline_container_classes(),
                        "Headline container not found; markup may have drifted"
                    );
                    Vec::new()
                }
            };
            links.push((topic.clone(), topic_links));
        }

        if !pages.is_empty() && fetch_failures == pages.len() {
            return Err(DiscoveryError::AllPagesFailed {
                attempted: pages.len(),
            });
        }

        let total: usize = links.iter().map(|(_, l)| l.len()).sum();
        info!(
            topics = links.len(),
            failed_pages = fetch_failures,
            total_links = total,
            "Link discovery complete"
        );
        Ok(links)
    }

    /// Locate the headline container and resolve its anchors.
    ///
    /// `None` means the container itself is missing, which the caller logs
    /// as markup drift; an empty vec means a container with no anchors.
    fn links_in_document(&self, document: &Html) -> Option<Vec<Url>> {
        let container = dom::first_with_classes(
            document,
            "div",
            self.publisher.headline_container_classes(),
        )?;

        let resolved = dom::anchor_hrefs(container)
            .iter()
            .filter_map(|href| match self.publisher.resolve_href(href) {
                Some(url) => Some(url),
                None => {
                    debug!(%href, "Href did not resolve to a URL; skipping");
                    None
                }
            })
            .collect();
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn discoverer_parts() -> (PageFetcher, Publisher) {
        let fetcher = PageFetcher::new(Duration::from_secs(5)).unwrap();
        (fetcher, Publisher::cnn())
    }

    const TOPIC_PAGE: &str = concat!(
        "<html><body>",
        r#"<div class="nav-bar"><a href="/ignored">nav</a></div>"#,
        r#"<div class="container_lead-plus-headlines__cards-wrapper">"#,
        r#"<a href="/a">A</a>"#,
        r#"<a href="/b">B</a>"#,
        r#"<a href="/a">A again</a>"#,
        "</div>",
        "</body></html>",
    );

    #[test]
    fn test_links_resolved_in_order_with_duplicates() {
        let (fetcher, publisher) = discoverer_parts();
        let discoverer = ArticleLinkDiscoverer::new(&fetcher, &publisher);
        let document = Html::parse_document(TOPIC_PAGE);

        let links = discoverer.links_in_document(&document).unwrap();
        let as_strings: Vec<&str> = links.iter().map(Url::as_str).collect();
        assert_eq!(
            as_strings,
            vec![
                "https://www.cnn.com/a",
                "https://www.cnn.com/b",
                "https://www.cnn.com/a",
            ]
        );
    }

    #[test]
    fn test_anchors_outside_container_are_ignored() {
        let (fetcher, publisher) = discoverer_parts();
        let discoverer = ArticleLinkDiscoverer::new(&fetcher, &publisher);
        let document = Html::parse_document(TOPIC_PAGE);

        let links = discoverer.links_in_document(&document).unwrap();
        assert!(links.iter().all(|url| !url.as_str().contains("ignored")));
    }

    #[test]
    fn test_missing_container_is_none() {
        let (fetcher, publisher) = discoverer_parts();
        let discoverer = ArticleLinkDiscoverer::new(&fetcher, &publisher);
        let document =
            Html::parse_document(r#"<div class="something-else"><a href="/a">A</a></div>"#);

        assert!(discoverer.links_in_document(&document).is_none());
    }

    #[test]
    fn test_container_without_anchors_is_empty() {
        let (fetcher, publisher) = discoverer_parts();
        let discoverer = ArticleLinkDiscoverer::new(&fetcher, &publisher);
        let document = Html::parse_document(
            r#"<div class="container_lead-plus-headlines__cards-wrapper"><p>no links today</p></div>"#,
        );

        let links = discoverer.links_in_document(&document).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_absolute_hrefs_pass_through() {
        let (fetcher, publisher) = discoverer_parts();
        let discoverer = ArticleLinkDiscoverer::new(&fetcher, &publisher);
        let document = Html::parse_document(concat!(
            r#"<div class="container_lead-plus-headlines__cards-wrapper">"#,
            r#"<a href="https://edition.cnn.com/story">external</a>"#,
            "</div>",
        ));

        let links = discoverer.links_in_document(&document).unwrap();
        assert_eq!(links[0].as_str(), "https://edition.cnn.com/story");
    }
}
