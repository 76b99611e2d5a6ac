//! Input truncation at token boundaries.
//!
//! Text is encoded, the id sequence is cut to the window, and the ids are decoded
//! back, so a multi-byte character or a sub-word is never split.

use std::ops::Deref;
use std::path::Path;

use tokenizers::Tokenizer;

use crate::errors::InferenceError;

/// Summarizer context is 1024 tokens; two are reserved for BOS/EOS.
pub const SUMMARIZER_INPUT_TOKENS: usize = 1022;
/// Translator context is 512 tokens; two are reserved for special tokens.
pub const TRANSLATOR_INPUT_TOKENS: usize = 510;

/// Encoding/decoding as exposed by a model tokenizer.
pub trait TokenCodec: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<u32>, InferenceError>;
    fn decode(&self, ids: &[u32]) -> Result<String, InferenceError>;
}

impl TokenCodec for Tokenizer {
    fn encode(&self, text: &str) -> Result<Vec<u32>, InferenceError> {
        let encoding = Deref::deref(self)
            .encode(text, false)
            .map_err(|e| InferenceError::Tokenizer(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn decode(&self, ids: &[u32]) -> Result<String, InferenceError> {
        Deref::deref(self)
            .decode(ids, true)
            .map_err(|e| InferenceError::Tokenizer(e.to_string()))
    }
}

/// A tokenizer paired with the model's input limit.
pub struct TokenWindow {
    codec: Box<dyn TokenCodec>,
    max_tokens: usize,
}

impl std::fmt::Debug for TokenWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenWindow")
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

impl TokenWindow {
    pub fn new(codec: Box<dyn TokenCodec>, max_tokens: usize) -> Self {
        Self { codec, max_tokens }
    }

    /// Loads a `tokenizer.json` from disk.
    ///
    /// # Errors
    ///
    /// Returns the tokenizer's error message if the file cannot be parsed.
    pub fn from_file(path: &Path, max_tokens: usize) -> Result<Self, String> {
        let tokenizer = Tokenizer::from_file(path).map_err(|e| e.to_string())?;
        Ok(Self::new(Box::new(tokenizer), max_tokens))
    }

    #[must_use]
    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    /// Returns `text` unchanged when it fits, otherwise the decoded prefix of
    /// `max_tokens` tokens.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Tokenizer`] if encoding or decoding fails.
    pub fn truncate(&self, text: &str) -> Result<String, InferenceError> {
        let ids = self.codec.encode(text)?;
        if ids.len() <= self.max_tokens {
            return Ok(text.to_string());
        }
        self.codec.decode(&ids[..self.max_tokens])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One token per whitespace-separated word.
    struct WordCodec;

    impl TokenCodec for WordCodec {
        fn encode(&self, text: &str) -> Result<Vec<u32>, InferenceError> {
            Ok(text
                .split_whitespace()
                .map(|w| u32::try_from(w.chars().count()).unwrap_or(u32::MAX))
                .collect())
        }

        fn decode(&self, ids: &[u32]) -> Result<String, InferenceError> {
            Ok(ids
                .iter()
                .map(|len| "w".repeat(*len as usize))
                .collect::<Vec<_>>()
                .join(" "))
        }
    }

    #[test]
    fn test_short_input_is_returned_verbatim() {
        let window = TokenWindow::new(Box::new(WordCodec), 5);
        assert_eq!(window.truncate("one two three").unwrap(), "one two three");
    }

    #[test]
    fn test_long_input_is_cut_at_token_boundary() {
        let window = TokenWindow::new(Box::new(WordCodec), 2);
        assert_eq!(window.truncate("alpha be gamma delta").unwrap(), "wwwww ww");
    }

    /// Whitespace-split word-level vocabulary without a decoder, so decoding
    /// joins tokens with single spaces.
    const WORD_LEVEL_TOKENIZER: &str = r#"{
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": { "[UNK]": 0, "the": 1, "quick": 2, "brown": 3, "fox": 4, "jumps": 5 },
            "unk_token": "[UNK]"
        }
    }"#;

    #[test]
    fn test_real_tokenizer_truncates_through_codec() {
        let tokenizer: Tokenizer = WORD_LEVEL_TOKENIZER.parse().unwrap();
        assert_eq!(
            TokenCodec::encode(&tokenizer, "the quick brown fox").unwrap(),
            vec![1, 2, 3, 4]
        );

        let window = TokenWindow::new(Box::new(tokenizer), 3);
        assert_eq!(window.truncate("the quick brown fox jumps").unwrap(), "the quick brown");
        assert_eq!(window.truncate("the fox").unwrap(), "the fox");
    }

    #[test]
    fn test_window_limits() {
        assert_eq!(SUMMARIZER_INPUT_TOKENS, 1022);
        assert_eq!(TRANSLATOR_INPUT_TOKENS, 510);
    }
}
