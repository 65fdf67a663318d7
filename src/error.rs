//! Typed errors for the discovery-and-extraction pipeline.
//!
//! The taxonomy separates three things callers need to tell apart:
//!
//! - [`SelectionError`]: the caller's topic selection was unusable. Fatal,
//!   and always raised before any network I/O.
//! - [`FetchError`]: one URL could not be fetched. Isolated per URL; the
//!   affected topic or article degrades to "no data" instead of aborting
//!   the batch.
//! - [`PipelineError`]: what a whole run can fail with. Partial misses are
//!   never an error; only bad input and the every-fetch-failed case are.
//!
//! A missing headline or body container is deliberately NOT in this
//! taxonomy. Markup drift shows up as an absent field on the record plus
//! a warning event, so callers can distinguish "publisher changed their
//! markup" from "the network is down".

use reqwest::StatusCode;
use thiserror::Error;

/// A single page fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection-level failure (DNS, refused connection, TLS).
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request exceeded the configured deadline.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(StatusCode),

    /// Content arrived but the body could not be decoded into text.
    #[error("response body could not be parsed: {0}")]
    Parse(#[source] reqwest::Error),
}

impl FetchError {
    /// Classify a `reqwest` error into the fetch taxonomy.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus(status)
        } else if err.is_decode() {
            FetchError::Parse(err)
        } else {
            FetchError::Transport(err)
        }
    }
}

/// The topic selection could not be turned into topic pages.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The serialized selection record was not valid JSON.
    #[error("topic selection is not a valid JSON record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The selection contained no topics at all.
    #[error("topic selection is empty")]
    Empty,

    /// None of the selected topics exist in the catalog.
    #[error("no selected topic matches the catalog (selected: {selected:?})")]
    NoMatchingTopics { selected: Vec<String> },
}

/// Link discovery failed as a whole.
///
/// Individual topic-page failures are isolated inside discovery; this only
/// fires when every topic page in the batch was unfetchable, which points
/// at an unreachable publisher rather than markup drift.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("all {attempted} topic page fetches failed; publisher unreachable")]
    AllPagesFailed { attempted: usize },
}

/// What a full pipeline run can fail with.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Every discovered article URL failed to fetch.
    #[error("all {attempted} article fetches failed; publisher unreachable")]
    AllArticlesFailed { attempted: usize },
}
