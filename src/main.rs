//! # trend_news
//!
//! Discovers trending news articles for user-selected topics on a news
//! portal and extracts a normalized (headline, body) pair from each
//! article page, tolerating HTML structure drift across publishers.
//!
//! ## Architecture
//!
//! The pipeline runs in three stages:
//! 1. **Resolve**: intersect the caller's topic selection with the
//!    publisher's topic catalog (fails fast on empty/non-matching input)
//! 2. **Discover**: fetch each topic page and collect the trending
//!    article links in its headline container, in document order
//! 3. **Extract**: fetch each article and pull out headline and body text
//!    using the publisher's structural-matching rules
//!
//! Per-URL failures are isolated and counted; only invalid input or a run
//! where every fetch failed aborts the batch.
//!
//! ## Usage
//!
//! ```sh
//! trend_news --topics '{"topics": ["Politics", "World"]}'
//! ```

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod discover;
mod dom;
mod error;
mod extract;
mod fetcher;
mod models;
mod pipeline;
mod topics;

use cli::Cli;
use extract::Publisher;
use fetcher::PageFetcher;
use pipeline::Pipeline;
use topics::{TopicCatalog, TopicSelection};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("trend_news starting up");

    let args = Cli::parse();
    debug!(?args.publisher, ?args.timeout_secs, "Parsed CLI arguments");

    let (publisher, catalog) = match args.publisher.as_str() {
        "cnn" => (Publisher::cnn(), TopicCatalog::cnn()),
        "apnews" => (Publisher::apnews(), TopicCatalog::apnews()),
        other => return Err(format!("unknown publisher: {other} (expected cnn or apnews)").into()),
    };

    // Input validation happens before any network access.
    let selection = TopicSelection::from_json(&args.topics)?;

    let fetcher = PageFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let pipeline = Pipeline::new(fetcher, publisher, catalog);
    let outcome = pipeline.run(&selection).await?;

    let empty_records = outcome.records.iter().filter(|r| r.is_empty()).count();
    info!(
        discovered = outcome.discovered,
        extracted = outcome.records.len(),
        failed = outcome.failed,
        empty_records,
        "Run summary"
    );

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&outcome.records)?);
    } else {
        for record in &outcome.records {
            println!("{}", serde_json::to_string(record)?);
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}
