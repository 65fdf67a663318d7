//! Topic catalogs and selection resolution.
//!
//! A [`TopicCatalog`] is the immutable topic-name → topic-page mapping for
//! one publisher, fixed at construction. [`TopicResolver`] intersects a
//! caller's [`TopicSelection`] with the catalog before any network access
//! happens: empty or entirely non-matching selections are rejected up
//! front, while individual unknown topics are silently dropped (a partial
//! match is valid and expected).

use crate::error::SelectionError;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error, instrument};
use url::Url;

/// Valid topic names mapped to their topic-page URLs, in resolution order.
///
/// Derived deterministically from the selection: first-occurrence order of
/// the selected topics, which later drives the ordering of the pipeline
/// output.
pub type ResolvedTopicPages = Vec<(String, Url)>;

/// Immutable mapping from topic name to topic-page URL.
///
/// Topic names are case-sensitive. Every URL is absolute and validated at
/// construction.
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    pages: HashMap<String, Url>,
}

impl TopicCatalog {
    /// Build a catalog from `(topic, absolute URL)` pairs.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Url)>,
        S: Into<String>,
    {
        let pages = entries
            .into_iter()
            .map(|(topic, url)| (topic.into(), url))
            .collect();
        Self { pages }
    }

    /// The topic pages CNN publishes trending headlines on.
    pub fn cnn() -> Self {
        let base = "https://www.cnn.com";
        Self::from_paths(
            base,
            [
                ("US", "/us"),
                ("World", "/world"),
                ("Politics", "/politics"),
                ("Business", "/business"),
                ("Health", "/health"),
                ("Entertainment", "/entertainment"),
                ("Style", "/style"),
                ("Travel", "/travel"),
                ("Science", "/science"),
                ("Climate", "/climate"),
            ],
        )
    }

    /// The hub pages AP News publishes trending headlines on.
    pub fn apnews() -> Self {
        let base = "https://apnews.com";
        Self::from_paths(
            base,
            [
                ("US", "/hub/us-news"),
                ("World", "/hub/world-news"),
                ("Politics", "/hub/politics"),
                ("Business", "/hub/business"),
                ("Health", "/hub/health"),
                ("Entertainment", "/hub/entertainment"),
                ("Science", "/hub/science"),
                ("Climate", "/hub/climate-and-environment"),
            ],
        )
    }

    fn from_paths<const N: usize>(base: &str, paths: [(&str, &str); N]) -> Self {
        let base = Url::parse(base).expect("static base URL");
        Self::new(paths.into_iter().map(|(topic, path)| {
            let url = base.join(path).expect("static topic path");
            (topic, url)
        }))
    }

    /// Look up the topic page for a topic name.
    pub fn get(&self, topic: &str) -> Option<&Url> {
        self.pages.get(topic)
    }

}

/// The set of topics a caller asked for.
///
/// Deserialized from the external input record, e.g.
/// `{"topics": ["Politics", "World"]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicSelection {
    topics: Vec<String>,
}

impl TopicSelection {
    /// Parse a selection from its serialized JSON record.
    pub fn from_json(raw: &str) -> Result<Self, SelectionError> {
        let selection: TopicSelection = serde_json::from_str(raw)?;
        Ok(selection)
    }

    pub fn new<S: Into<String>>(topics: impl IntoIterator<Item = S>) -> Self {
        Self {
            topics: topics.into_iter().map(Into::into).collect(),
        }
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}

/// Resolves topic selections against one publisher's catalog.
#[derive(Debug, Clone)]
pub struct TopicResolver {
    catalog: TopicCatalog,
}

impl TopicResolver {
    pub fn new(catalog: TopicCatalog) -> Self {
        Self { catalog }
    }

    /// Map a selection to the topic pages it names.
    ///
    /// Fails when the selection is empty or when it shares no topic with
    /// the catalog. Topics absent from the catalog are dropped without
    /// error; repeated topics resolve once, at their first position.
    #[instrument(level = "debug", skip_all)]
    pub fn resolve(&self, selection: &TopicSelection) -> Result<ResolvedTopicPages, SelectionError> {
        if selection.topics().is_empty() {
            error!("No topics provided in selection");
            return Err(SelectionError::Empty);
        }

        let mut resolved: ResolvedTopicPages = Vec::new();
        for topic in selection.topics() {
            if resolved.iter().any(|(seen, _)| seen == topic) {
                continue;
            }
            match self.catalog.get(topic) {
                Some(url) => resolved.push((topic.clone(), url.clone())),
                None => debug!(%topic, "Selected topic not in catalog; dropping"),
            }
        }

        if resolved.is_empty() {
            error!(selected = ?selection.topics(), "No selected topic matches the catalog");
            return Err(SelectionError::NoMatchingTopics {
                selected: selection.topics().to_vec(),
            });
        }

        debug!(count = resolved.len(), "Resolved topic pages");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> TopicResolver {
        TopicResolver::new(TopicCatalog::cnn())
    }

    #[test]
    fn test_resolve_returns_exact_intersection() {
        let selection = TopicSelection::new(["Politics", "World"]);
        let resolved = resolver().resolve(&selection).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].0, "Politics");
        assert_eq!(resolved[0].1.as_str(), "https://www.cnn.com/politics");
        assert_eq!(resolved[1].0, "World");
        assert_eq!(resolved[1].1.as_str(), "https://www.cnn.com/world");
    }

    #[test]
    fn test_resolve_preserves_selection_order() {
        let selection = TopicSelection::new(["Climate", "US", "Health"]);
        let resolved = resolver().resolve(&selection).unwrap();
        let topics: Vec<&str> = resolved.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(topics, vec!["Climate", "US", "Health"]);
    }

    #[test]
    fn test_resolve_drops_unknown_topics_silently() {
        let selection = TopicSelection::new(["Sports", "Politics", "Weather"]);
        let resolved = resolver().resolve(&selection).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0, "Politics");
    }

    #[test]
    fn test_resolve_deduplicates_repeated_topics() {
        let selection = TopicSelection::new(["US", "Politics", "US"]);
        let resolved = resolver().resolve(&selection).unwrap();
        let topics: Vec<&str> = resolved.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(topics, vec!["US", "Politics"]);
    }

    #[test]
    fn test_resolve_empty_selection_fails() {
        let selection = TopicSelection::new(Vec::<String>::new());
        let err = resolver().resolve(&selection).unwrap_err();
        assert!(matches!(err, SelectionError::Empty));
    }

    #[test]
    fn test_resolve_no_matching_topics_fails() {
        let selection = TopicSelection::new(["NotATopic"]);
        let err = resolver().resolve(&selection).unwrap_err();
        match err {
            SelectionError::NoMatchingTopics { selected } => {
                assert_eq!(selected, vec!["NotATopic".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_topic_names_are_case_sensitive() {
        let selection = TopicSelection::new(["politics"]);
        assert!(resolver().resolve(&selection).is_err());
    }

    #[test]
    fn test_selection_from_json() {
        let selection = TopicSelection::from_json(r#"{"topics": ["Politics", "Health"]}"#).unwrap();
        assert_eq!(selection.topics(), ["Politics", "Health"]);
    }

    #[test]
    fn test_selection_from_malformed_json_fails() {
        let err = TopicSelection::from_json(r#"{"topics": ["#).unwrap_err();
        assert!(matches!(err, SelectionError::Malformed(_)));

        let err = TopicSelection::from_json(r#"{"subjects": ["Politics"]}"#).unwrap_err();
        assert!(matches!(err, SelectionError::Malformed(_)));
    }

    #[test]
    fn test_catalog_urls_are_absolute() {
        for catalog in [TopicCatalog::cnn(), TopicCatalog::apnews()] {
            for topic in ["US", "Politics"] {
                let url = catalog.get(topic).unwrap();
                assert!(url.scheme().starts_with("http"));
                assert!(url.host_str().is_some());
            }
        }
    }
}
