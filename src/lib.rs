/// TLDR Reader - summarizes web articles, optionally translates the summary to
/// Hebrew, and reads text aloud.
///
/// # Architecture
///
/// A single API Lambda fronted by a function URL:
/// 1. `article` downloads a page and extracts its paragraph text
/// 2. `ai` detects the language, picks a length budget, summarizes and translates
/// 3. `speech` turns any text into MP3 with a chosen neural voice
///
/// Models are loaded once per cold start. If loading fails the Lambda still
/// starts and answers processing requests with 503.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use tldr_reader::ai::AiProcessor;
/// use tldr_reader::article::HttpArticleFetcher;
/// use tldr_reader::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     tldr_reader::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let fetcher = Arc::new(HttpArticleFetcher::new(config.fetch_timeout_secs)?);
///     let processor = AiProcessor::initialize(&config, fetcher).await;
///
///     let article = processor
///         .process("https://example.com/news/article", "he", "short")
///         .await?;
///     println!("[{}] {}", article.detected_language, article.processed_text);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod article;
pub mod core;
pub mod errors;
pub mod speech;

pub use errors::ProcessingError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Installs a tracing-subscriber JSON formatter suitable for `CloudWatch` Logs,
/// filtered by `RUST_LOG` (default `info`). Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// tldr_reader::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
