//! Text-to-speech. Independent of the article pipeline: it speaks whatever text
//! the caller hands it.

pub mod azure;
pub mod text;
pub mod voices;

use async_trait::async_trait;

use crate::errors::SpeechError;

pub use azure::AzureSpeechSynthesizer;
pub use voices::{Voice, VoiceCatalogue, format_voice_catalogue};

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Renders `text` with `voice` (a `ShortName` such as `en-US-AriaNeural`) to MP3 bytes.
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SpeechError>;

    /// Available voices, sorted by `ShortName`.
    async fn list_voices(&self) -> Result<Vec<Voice>, SpeechError>;
}
