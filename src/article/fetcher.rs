use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info};
use url::Url;

use super::extract::extract_article_text;
use crate::errors::FetchError;

/// Many news sites reject non-browser agents.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Turns a URL into the plain text of the article it points to.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpArticleFetcher {
    client: Client,
}

impl HttpArticleFetcher {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout_secs: u64) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FetchError::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

/// Accepts only absolute http(s) URLs.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] for anything else.
pub fn parse_article_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl(format!("unsupported scheme '{other}'"))),
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = parse_article_url(url)?;
        info!(url = %url, "Fetching article");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let html = response.text().await?;
        debug!(url = %url, bytes = html.len(), "Article downloaded");

        Ok(extract_article_text(&html))
    }
}
