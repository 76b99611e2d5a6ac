use thiserror::Error;

/// Errors surfaced by [`crate::ai::AiProcessor::process`].
///
/// Only these two kinds ever reach the transport layer; collaborator errors are
/// folded into one of them with a human-readable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    /// Client-input problem (unsupported language, level, empty article,
    /// unsupported source language). Not retryable.
    #[error("{0}")]
    InvalidArgument(String),

    /// Models unavailable or an upstream dependency failed. The caller may retry later.
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl ProcessingError {
    /// HTTP status class used by the API layer.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            ProcessingError::InvalidArgument(_) => 422,
            ProcessingError::ServiceUnavailable(_) => 503,
        }
    }
}

/// Raised by a model collaborator's constructor when its pipeline cannot be loaded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to load the {model} model: {reason}")]
pub struct ModelLoadingError {
    pub model: String,
    pub reason: String,
}

impl ModelLoadingError {
    pub fn new(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch or read URL: {0}")]
    Http(String),

    #[error("URL returned HTTP status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Http(error.to_string()),
        }
    }
}

/// Per-call failure of a loaded model collaborator.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Failed to reach the inference endpoint: {0}")]
    Http(String),

    #[error("Inference endpoint returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Model returned no output")]
    EmptyOutput,
}

impl InferenceError {
    /// The hosted endpoint answers 503 while a cold model is being loaded.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, InferenceError::Api { status: 503, .. } | InferenceError::Http(_))
    }
}

impl From<reqwest::Error> for InferenceError {
    fn from(error: reqwest::Error) -> Self {
        InferenceError::Http(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech service is not configured: {0}")]
    NotConfigured(String),

    #[error("Failed to reach the speech service: {0}")]
    Http(String),

    #[error("Speech service returned status {status}: {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for SpeechError {
    fn from(error: reqwest::Error) -> Self {
        SpeechError::Http(error.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
