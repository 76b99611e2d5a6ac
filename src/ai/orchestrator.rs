//! Article processing pipeline: fetch → detect → summarize → (translate).

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use super::budget::{DestinationClass, length_budget};
use super::language::LanguageDetector;
use super::summarizer::{EnglishSummarizer, Summarizer};
use super::translator::{HebrewTranslator, Translator};
use crate::article::ArticleFetcher;
use crate::core::config::AppConfig;
use crate::core::models::{
    LengthBudget, ProcessUrlRequest, ProcessedArticle, SourceLanguageInfo, SummaryLevel,
    TargetLanguage,
};
use crate::errors::{InferenceError, ModelLoadingError, ProcessingError};

const UNAVAILABLE_MESSAGE: &str =
    "AI processor is not available due to a model loading error.";

/// Whether the model pipelines came up. Fixed for the lifetime of the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorInitState {
    pub ready: bool,
    pub failure_reason: Option<String>,
}

struct Models {
    summarizer: Arc<dyn Summarizer>,
    translator: Arc<dyn Translator>,
}

/// Orchestrates fetching, summarizing, and translating web articles.
///
/// Construction never fails: if a model cannot be loaded the processor still
/// exists but answers every request with [`ProcessingError::ServiceUnavailable`].
pub struct AiProcessor {
    models: Option<Models>,
    init_state: ProcessorInitState,
    fetcher: Arc<dyn ArticleFetcher>,
    detector: LanguageDetector,
}

impl AiProcessor {
    /// Loads the summarizer, then the translator. A failure of either leaves the
    /// processor permanently unavailable.
    pub async fn initialize(config: &AppConfig, fetcher: Arc<dyn ArticleFetcher>) -> Self {
        let summarizer = EnglishSummarizer::load(config)
            .await
            .map(|s| Arc::new(s) as Arc<dyn Summarizer>);

        let translator = match &summarizer {
            Ok(_) => HebrewTranslator::load(config)
                .await
                .map(|t| Arc::new(t) as Arc<dyn Translator>),
            Err(e) => Err(e.clone()),
        };

        Self::from_models(summarizer, translator, fetcher)
    }

    /// Builds a processor from already-attempted model loads.
    pub fn from_models(
        summarizer: Result<Arc<dyn Summarizer>, ModelLoadingError>,
        translator: Result<Arc<dyn Translator>, ModelLoadingError>,
        fetcher: Arc<dyn ArticleFetcher>,
    ) -> Self {
        let (models, init_state) = match (summarizer, translator) {
            (Ok(summarizer), Ok(translator)) => {
                info!("AI Processor initialized successfully.");
                (
                    Some(Models {
                        summarizer,
                        translator,
                    }),
                    ProcessorInitState {
                        ready: true,
                        failure_reason: None,
                    },
                )
            }
            (Err(e), _) | (_, Err(e)) => {
                error!(
                    "Failed to initialize one or more AI models. The processor will be unavailable: {}",
                    e
                );
                (
                    None,
                    ProcessorInitState {
                        ready: false,
                        failure_reason: Some(e.to_string()),
                    },
                )
            }
        };

        Self {
            models,
            init_state,
            fetcher,
            detector: LanguageDetector::new(),
        }
    }

    #[must_use]
    pub fn init_state(&self) -> &ProcessorInitState {
        &self.init_state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.init_state.ready
    }

    /// # Errors
    ///
    /// See [`AiProcessor::process`].
    pub async fn process_request(
        &self,
        request: &ProcessUrlRequest,
    ) -> Result<ProcessedArticle, ProcessingError> {
        self.process(&request.url, &request.target_lang, &request.summary_level)
            .await
    }

    /// Fetches the article at `url`, summarizes it at `summary_level` and, when
    /// `target_lang` is not English, translates the summary.
    ///
    /// # Errors
    ///
    /// - [`ProcessingError::ServiceUnavailable`] if the models failed to load, the
    ///   article cannot be fetched, or a model call fails.
    /// - [`ProcessingError::InvalidArgument`] for an unsupported target language or
    ///   summary level, an article without readable text, or a non-English source.
    #[tracing::instrument(level = "info", skip(self), fields(request_id = %Uuid::new_v4()))]
    pub async fn process(
        &self,
        url: &str,
        target_lang: &str,
        summary_level: &str,
    ) -> Result<ProcessedArticle, ProcessingError> {
        let Some(models) = &self.models else {
            warn!("Rejecting request: models not loaded");
            return Err(ProcessingError::ServiceUnavailable(
                UNAVAILABLE_MESSAGE.to_string(),
            ));
        };

        let target = TargetLanguage::from_code(target_lang).ok_or_else(|| {
            ProcessingError::InvalidArgument(format!(
                "Target language '{target_lang}' is not supported."
            ))
        })?;
        let budget = select_budget(target, summary_level)?;

        let article_text = self.fetcher.fetch(url).await.map_err(|e| {
            error!(url, "Failed to fetch or parse article: {}", e);
            ProcessingError::ServiceUnavailable(format!(
                "Failed to fetch content from the provided URL: {url}"
            ))
        })?;

        #[cfg(feature = "debug-logs")]
        tracing::debug!("Extracted article text:\n{}", article_text);

        if article_text.trim().is_empty() {
            return Err(ProcessingError::InvalidArgument(
                "Could not extract readable text from the provided URL.".to_string(),
            ));
        }

        let source = self.detector.detect(&article_text);
        if !source.is_privileged {
            return Err(ProcessingError::InvalidArgument(format!(
                "Unsupported path: from language '{}' to '{}'.",
                source_label(&source),
                target
            )));
        }

        info!("Step 1/2: Summarizing English text...");
        let summary = models
            .summarizer
            .summarize(&article_text, budget.min_length, budget.max_length)
            .await
            .map_err(|e| model_failure("summarization", &e))?;

        let processed_text = match target {
            TargetLanguage::English => {
                info!("English summary requested. Task complete.");
                summary
            }
            TargetLanguage::Hebrew => {
                info!("Step 2/2: Translating summary to Hebrew...");
                models
                    .translator
                    .translate(&summary, budget.max_length)
                    .await
                    .map_err(|e| model_failure("translation", &e))?
            }
        };

        Ok(ProcessedArticle {
            processed_text,
            detected_language: source.display_name,
        })
    }
}

/// Picks the budget for `summary_level`, from the table implied by `target`.
///
/// # Errors
///
/// Returns [`ProcessingError::InvalidArgument`] if the level is unknown.
pub fn select_budget(
    target: TargetLanguage,
    summary_level: &str,
) -> Result<LengthBudget, ProcessingError> {
    let class = DestinationClass::for_target(target);
    SummaryLevel::from_name(summary_level)
        .and_then(|level| length_budget(class, level))
        .ok_or_else(|| {
            ProcessingError::InvalidArgument(format!(
                "Summary level '{summary_level}' is not supported."
            ))
        })
}

fn source_label(source: &SourceLanguageInfo) -> &str {
    source
        .normalized_code
        .as_deref()
        .unwrap_or(&source.display_name)
}

fn model_failure(stage: &str, e: &InferenceError) -> ProcessingError {
    error!(stage, "Model call failed: {}", e);
    ProcessingError::ServiceUnavailable(format!(
        "The {stage} model failed to process the article. Please try again later."
    ))
}
