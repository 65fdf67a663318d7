//! The composition root: topic selection in, article records out.
//!
//! `run` wires the stages together: resolve the selection against the
//! catalog, discover article links per topic page, then extract every
//! article with per-link failure isolation. Extraction runs on a bounded
//! concurrent stream; each link carries its original (topic, document)
//! index and results are reordered by it before returning, so completion
//! order never leaks into the output.

use crate::discover::ArticleLinkDiscoverer;
use crate::error::PipelineError;
use crate::extract::{ArticleExtractor, Publisher};
use crate::fetcher::PageFetcher;
use crate::models::{ArticleRecord, RunOutcome};
use crate::topics::{TopicCatalog, TopicResolver, TopicSelection};
use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};
use url::Url;

/// How many article fetches are in flight at once.
const CONCURRENT_FETCHES: usize = 8;

/// One publisher's discovery-and-extraction pipeline.
#[derive(Debug)]
pub struct Pipeline {
    fetcher: PageFetcher,
    publisher: Publisher,
    resolver: TopicResolver,
}

impl Pipeline {
    pub fn new(fetcher: PageFetcher, publisher: Publisher, catalog: TopicCatalog) -> Self {
        Self {
            fetcher,
            publisher,
            resolver: TopicResolver::new(catalog),
        }
    }

    /// Run the full pipeline for one topic selection.
    ///
    /// Partial misses never fail the run: a failed article fetch is
    /// logged, counted, and excluded. Errors are reserved for invalid
    /// selections and for runs where every fetch failed.
    #[instrument(level = "info", skip_all, fields(publisher = self.publisher.name))]
    pub async fn run(&self, selection: &TopicSelection) -> Result<RunOutcome, PipelineError> {
        let pages = self.resolver.resolve(selection)?;
        info!(topics = pages.len(), "Topic selection resolved");

        let discoverer = ArticleLinkDiscoverer::new(&self.fetcher, &self.publisher);
        let links = discoverer.discover(&pages).await?;

        let jobs: Vec<(usize, String, Url)> = links
            .into_iter()
            .flat_map(|(topic, urls)| urls.into_iter().map(move |url| (topic.clone(), url)))
            .enumerate()
            .map(|(index, (topic, url))| (index, topic, url))
            .collect();
        let discovered = jobs.len();

        let extractor = ArticleExtractor::new(&self.fetcher, &self.publisher);
        let extractor = &extractor;
        let results: Vec<(usize, Option<ArticleRecord>)> = stream::iter(jobs)
            .map(|(index, topic, url)| async move {
                match extractor.extract(&url).await {
                    Ok(record) => (index, Some(record)),
                    Err(e) => {
                        warn!(%topic, %url, error = %e, "Article extraction failed; skipping");
                        (index, None)
                    }
                }
            })
            .buffer_unordered(CONCURRENT_FETCHES)
            .collect()
            .await;

        let (records, failed) = collect_in_order(results);
        if discovered > 0 && failed == discovered {
            return Err(PipelineError::AllArticlesFailed {
                attempted: discovered,
            });
        }

        info!(
            discovered,
            extracted = records.len(),
            failed,
            "Pipeline run complete"
        );
        Ok(RunOutcome {
            records,
            discovered,
            failed,
        })
    }
}

/// Restore discovery order after concurrent completion and count the
/// failed slots.
fn collect_in_order(
    mut results: Vec<(usize, Option<ArticleRecord>)>,
) -> (Vec<ArticleRecord>, usize) {
    results.sort_by_key(|(index, _)| *index);
    let mut failed = 0usize;
    let records = results
        .into_iter()
        .filter_map(|(_, record)| {
            if record.is_none() {
                failed += 1;
            }
            record
        })
        .collect();
    (records, failed)
}
