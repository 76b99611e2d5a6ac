//! Article download and text extraction

pub mod extract;
pub mod fetcher;

pub use extract::extract_article_text;
pub use fetcher::{ArticleFetcher, HttpArticleFetcher};
