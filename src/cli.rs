//! Command-line interface definitions.
//!
//! The CLI is a thin shell around [`crate::pipeline::Pipeline::run`]: it
//! carries the serialized topic selection in, and formatting of the record
//! sequence out. All options can also come from environment variables.

use clap::Parser;

/// Command-line arguments for the trend_news pipeline.
///
/// # Examples
///
/// ```sh
/// trend_news --topics '{"topics": ["Politics", "World"]}'
/// trend_news -t '{"topics": ["US"]}' --publisher apnews --timeout-secs 20
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Topic selection as a JSON record, e.g. '{"topics": ["Politics"]}'
    #[arg(short, long, env = "TREND_NEWS_TOPICS")]
    pub topics: String,

    /// Publisher to scrape: cnn or apnews
    #[arg(short, long, env = "TREND_NEWS_PUBLISHER", default_value = "cnn")]
    pub publisher: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,

    /// Emit records as pretty-printed JSON instead of one object per line
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "trend_news",
            "--topics",
            r#"{"topics": ["Politics"]}"#,
            "--publisher",
            "apnews",
        ]);

        assert_eq!(cli.topics, r#"{"topics": ["Politics"]}"#);
        assert_eq!(cli.publisher, "apnews");
        assert_eq!(cli.timeout_secs, 15);
        assert!(!cli.pretty);
    }

    #[test]
    fn test_cli_short_flags_and_defaults() {
        let cli = Cli::parse_from(["trend_news", "-t", r#"{"topics": ["US"]}"#]);

        assert_eq!(cli.topics, r#"{"topics": ["US"]}"#);
        assert_eq!(cli.publisher, "cnn");
    }
}
