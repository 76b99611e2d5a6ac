//! English summarization collaborator.

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info};

use super::inference::{InferenceClient, load_token_window};
use super::truncation::{SUMMARIZER_INPUT_TOKENS, TokenWindow};
use crate::core::config::AppConfig;
use crate::errors::{InferenceError, ModelLoadingError};

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes `text` to between `min_length` and `max_length` model tokens.
    async fn summarize(
        &self,
        text: &str,
        min_length: u32,
        max_length: u32,
    ) -> Result<String, InferenceError>;
}

/// distilBART-CNN summarizer served by the hosted inference endpoint.
#[derive(Debug)]
pub struct EnglishSummarizer {
    window: TokenWindow,
    client: InferenceClient,
}

impl EnglishSummarizer {
    /// Loads the tokenizer and prepares the endpoint client.
    ///
    /// # Errors
    ///
    /// Returns [`ModelLoadingError`] if either part cannot be set up.
    pub async fn load(config: &AppConfig) -> Result<Self, ModelLoadingError> {
        info!(
            model = %config.summarizer_model,
            "Loading English summarization model..."
        );
        let result = async {
            let window = load_token_window(
                &config.summarizer_model,
                &config.summarizer_tokenizer,
                config.hf_api_token.clone(),
                SUMMARIZER_INPUT_TOKENS,
            )
            .await?;
            let client = InferenceClient::new(
                &config.hf_inference_url,
                &config.summarizer_model,
                config.hf_api_token.clone(),
            )?;
            Ok::<_, ModelLoadingError>(Self::new(window, client))
        }
        .await;

        match &result {
            Ok(_) => info!("English summarization model loaded successfully."),
            Err(e) => error!("Failed to load the English summarization model: {}", e),
        }
        result
    }

    #[must_use]
    pub fn new(window: TokenWindow, client: InferenceClient) -> Self {
        Self { window, client }
    }
}

#[async_trait]
impl Summarizer for EnglishSummarizer {
    async fn summarize(
        &self,
        text: &str,
        min_length: u32,
        max_length: u32,
    ) -> Result<String, InferenceError> {
        let truncated = self.window.truncate(text)?;
        self.client
            .generate(
                &truncated,
                json!({
                    "min_length": min_length,
                    "max_length": max_length,
                    "do_sample": false,
                }),
                "summary_text",
            )
            .await
    }
}
