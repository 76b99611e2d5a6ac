//! Azure neural text-to-speech over the REST API.
//!
//! Same voice catalogue and `ShortName` scheme as the Edge read-aloud voices.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{info, warn};

use super::SpeechSynthesizer;
use super::text::{build_ssml, preprocess_text};
use super::voices::Voice;
use crate::core::config::AppConfig;
use crate::errors::SpeechError;

const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";
const REQUEST_TIMEOUT_SECS: u64 = 60;

pub struct AzureSpeechSynthesizer {
    http: Client,
    key: String,
    base_url: String,
}

impl AzureSpeechSynthesizer {
    /// # Errors
    ///
    /// Returns [`SpeechError::NotConfigured`] when no `SPEECH_KEY` is set, or an
    /// HTTP error if the client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SpeechError> {
        let key = config
            .speech_key
            .clone()
            .ok_or_else(|| SpeechError::NotConfigured("SPEECH_KEY is not set".to_string()))?;
        Self::new(
            key,
            format!("https://{}.tts.speech.microsoft.com", config.speech_region),
        )
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(key: String, base_url: String) -> Result<Self, SpeechError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("tldr-reader/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, SpeechError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_else(|e| {
            format!("Failed to read error response body (status {status}): {e}")
        });
        warn!(status = status.as_u16(), "Speech service error: {}", message);
        Err(SpeechError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for AzureSpeechSynthesizer {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SpeechError> {
        let ssml = build_ssml(&preprocess_text(text), voice);
        info!(voice, chars = text.chars().count(), "Synthesizing speech");

        let response = self
            .http
            .post(format!("{}/cognitiveservices/v1", self.base_url))
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .header(CONTENT_TYPE, "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .body(ssml)
            .send()
            .await?;

        let audio = Self::check(response).await?.bytes().await?;
        Ok(audio.to_vec())
    }

    async fn list_voices(&self) -> Result<Vec<Voice>, SpeechError> {
        let response = self
            .http
            .get(format!("{}/cognitiveservices/voices/list", self.base_url))
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .send()
            .await?;

        let mut voices: Vec<Voice> = Self::check(response).await?.json().await?;
        voices.sort_by(|a, b| a.short_name.cmp(&b.short_name));
        Ok(voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_key() {
        let config = AppConfig::default();
        assert!(matches!(
            AzureSpeechSynthesizer::from_config(&config),
            Err(SpeechError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_from_config_builds_regional_endpoint() {
        let config = AppConfig {
            speech_key: Some("key".into()),
            speech_region: "eastus".into(),
            ..AppConfig::default()
        };
        let synth = AzureSpeechSynthesizer::from_config(&config).unwrap();
        assert_eq!(synth.base_url, "https://eastus.tts.speech.microsoft.com");
    }
}
