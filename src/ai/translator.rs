//! English → Hebrew translation collaborator.

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info};

use super::inference::{InferenceClient, load_token_window};
use super::truncation::{TRANSLATOR_INPUT_TOKENS, TokenWindow};
use crate::core::config::AppConfig;
use crate::errors::{InferenceError, ModelLoadingError};

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text`, producing at most `max_length` model tokens.
    async fn translate(&self, text: &str, max_length: u32) -> Result<String, InferenceError>;
}

/// Opus-MT English→Hebrew translator served by the hosted inference endpoint.
#[derive(Debug)]
pub struct HebrewTranslator {
    window: TokenWindow,
    client: InferenceClient,
}

impl HebrewTranslator {
    /// # Errors
    ///
    /// Returns [`ModelLoadingError`] if the tokenizer or endpoint client cannot be set up.
    pub async fn load(config: &AppConfig) -> Result<Self, ModelLoadingError> {
        info!(
            model = %config.translator_model,
            "Loading English-to-Hebrew translation model..."
        );
        let result = async {
            let window = load_token_window(
                &config.translator_model,
                &config.translator_tokenizer,
                config.hf_api_token.clone(),
                TRANSLATOR_INPUT_TOKENS,
            )
            .await?;
            let client = InferenceClient::new(
                &config.hf_inference_url,
                &config.translator_model,
                config.hf_api_token.clone(),
            )?;
            Ok::<_, ModelLoadingError>(Self::new(window, client))
        }
        .await;

        match &result {
            Ok(_) => info!("English-to-Hebrew translation model loaded successfully."),
            Err(e) => error!("Failed to load the English-to-Hebrew translation model: {}", e),
        }
        result
    }

    #[must_use]
    pub fn new(window: TokenWindow, client: InferenceClient) -> Self {
        Self { window, client }
    }
}

#[async_trait]
impl Translator for HebrewTranslator {
    async fn translate(&self, text: &str, max_length: u32) -> Result<String, InferenceError> {
        let truncated = self.window.truncate(text)?;
        self.client
            .generate(
                &truncated,
                json!({ "max_length": max_length }),
                "translation_text",
            )
            .await
    }
}
