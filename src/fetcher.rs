//! Page fetching with a fixed browser-like identity.
//!
//! One [`PageFetcher`] wraps one `reqwest::Client` configured with the
//! header set (user-agent, referer, accept-language) that keeps the news
//! portals from serving trivial bot-block pages. Every fetch failure is
//! classified into the [`FetchError`] taxonomy; nothing is silently
//! coerced to empty content.
//!
//! This layer performs no retries. Retry policy belongs to callers that
//! know whether a URL is worth a second attempt.

use crate::error::FetchError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, instrument};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
const BROWSER_REFERER: &str = "https://www.google.com/";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Fetches URLs and hands back parsed documents.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher with the fixed identity headers and a per-request
    /// timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static(BROWSER_REFERER));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch one URL and parse the response body into a document.
    ///
    /// The returned [`Html`] is scoped to this call; callers extract what
    /// they need and drop it rather than sharing it across extractions.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Html, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let response = response
            .error_for_status()
            .map_err(FetchError::from_reqwest)?;

        let body = response.text().await.map_err(FetchError::from_reqwest)?;
        debug!(bytes = body.len(), "Fetched page body");
        Ok(Html::parse_document(&body))
    }
}
