use std::sync::Arc;

use tracing::{info, warn};

use crate::ai::AiProcessor;
use crate::article::{ArticleFetcher, HttpArticleFetcher};
use crate::core::config::AppConfig;
use crate::errors::{FetchError, ModelLoadingError};
use crate::speech::{AzureSpeechSynthesizer, SpeechSynthesizer};

/// Everything the handler needs, built once per process and shared read-only
/// across invocations.
pub struct AppState {
    pub processor: AiProcessor,
    /// `None` when no speech service is configured.
    pub speech: Option<Arc<dyn SpeechSynthesizer>>,
    pub allowed_origin: String,
}

impl AppState {
    /// Loads models and clients. Never fails: a model that cannot be loaded
    /// leaves the processor unavailable, a missing speech key disables speech.
    pub async fn initialize(config: &AppConfig) -> Self {
        let processor = match HttpArticleFetcher::new(config.fetch_timeout_secs) {
            Ok(fetcher) => AiProcessor::initialize(config, Arc::new(fetcher)).await,
            Err(e) => unavailable_processor(&e),
        };

        let speech = match AzureSpeechSynthesizer::from_config(config) {
            Ok(synth) => Some(Arc::new(synth) as Arc<dyn SpeechSynthesizer>),
            Err(e) => {
                warn!("Speech synthesis disabled: {}", e);
                None
            }
        };

        info!(
            processor_ready = processor.is_ready(),
            speech_enabled = speech.is_some(),
            "Application state initialized"
        );

        Self {
            processor,
            speech,
            allowed_origin: config.allowed_origin.clone(),
        }
    }
}

/// Without an HTTP client nothing can be fetched, so the processor is built in
/// its unavailable state.
fn unavailable_processor(e: &FetchError) -> AiProcessor {
    struct NoFetcher;

    #[async_trait::async_trait]
    impl ArticleFetcher for NoFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            Err(FetchError::Http("HTTP client unavailable".to_string()))
        }
    }

    let failure = ModelLoadingError::new("article fetcher", e.to_string());
    AiProcessor::from_models(Err(failure.clone()), Err(failure), Arc::new(NoFetcher))
}
