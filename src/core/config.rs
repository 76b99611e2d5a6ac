use std::env;

use crate::errors::ConfigError;

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_SUMMARIZER_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_TRANSLATOR_MODEL: &str = "Helsinki-NLP/opus-mt-en-he";
/// Hub repos carrying a `tokenizer.json` for the models above.
pub const DEFAULT_SUMMARIZER_TOKENIZER: &str = "Xenova/distilbart-cnn-12-6";
pub const DEFAULT_TRANSLATOR_TOKENIZER: &str = "Xenova/opus-mt-en-he";
pub const DEFAULT_SPEECH_REGION: &str = "westeurope";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hf_api_token: Option<String>,
    pub hf_inference_url: String,
    pub summarizer_model: String,
    pub translator_model: String,
    pub summarizer_tokenizer: String,
    pub translator_tokenizer: String,
    pub speech_key: Option<String>,
    pub speech_region: String,
    pub fetch_timeout_secs: u64,
    pub allowed_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hf_api_token: None,
            hf_inference_url: DEFAULT_INFERENCE_URL.to_string(),
            summarizer_model: DEFAULT_SUMMARIZER_MODEL.to_string(),
            translator_model: DEFAULT_TRANSLATOR_MODEL.to_string(),
            summarizer_tokenizer: DEFAULT_SUMMARIZER_TOKENIZER.to_string(),
            translator_tokenizer: DEFAULT_TRANSLATOR_TOKENIZER.to_string(),
            speech_key: None,
            speech_region: DEFAULT_SPEECH_REGION.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `FETCH_TIMEOUT_SECS` is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let fetch_timeout_secs = match non_empty("FETCH_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        name: "FETCH_TIMEOUT_SECS",
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "FETCH_TIMEOUT_SECS",
                        reason: e.to_string(),
                    });
                }
            },
            None => defaults.fetch_timeout_secs,
        };

        Ok(Self {
            hf_api_token: non_empty("HF_API_TOKEN"),
            hf_inference_url: non_empty("HF_INFERENCE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.hf_inference_url),
            summarizer_model: non_empty("SUMMARIZER_MODEL").unwrap_or(defaults.summarizer_model),
            translator_model: non_empty("TRANSLATOR_MODEL").unwrap_or(defaults.translator_model),
            summarizer_tokenizer: non_empty("SUMMARIZER_TOKENIZER")
                .unwrap_or(defaults.summarizer_tokenizer),
            translator_tokenizer: non_empty("TRANSLATOR_TOKENIZER")
                .unwrap_or(defaults.translator_tokenizer),
            speech_key: non_empty("SPEECH_KEY"),
            speech_region: non_empty("SPEECH_REGION").unwrap_or(defaults.speech_region),
            fetch_timeout_secs,
            allowed_origin: non_empty("ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
        })
    }
}
