//! Source language detection.
//!
//! `whatlang` is a trigram classifier without random state, so identical input
//! always yields the identical guess.

use tracing::{info, warn};
use whatlang::Lang;

use crate::core::models::SourceLanguageInfo;

/// Only the leading part of an article is inspected.
pub const DETECTION_SAMPLE_CHARS: usize = 1000;

pub const UNKNOWN_LANGUAGE_NAME: &str = "Unknown";

/// Two-letter code of the privileged source language.
const PRIVILEGED_CODE: &str = "en";

#[derive(Debug, Clone)]
pub struct LanguageDetector {
    sample_chars: usize,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self {
            sample_chars: DETECTION_SAMPLE_CHARS,
        }
    }
}

impl LanguageDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `text`. Detection failure is not an error: it degrades to an
    /// unknown, non-privileged language.
    #[must_use]
    pub fn detect(&self, text: &str) -> SourceLanguageInfo {
        let sample = leading_chars(text, self.sample_chars);

        let detected = match whatlang::detect(sample) {
            Some(info) if info.is_reliable() => info,
            Some(info) => {
                warn!(
                    guess = info.lang().code(),
                    confidence = info.confidence(),
                    "Language detection is not reliable for the provided text snippet. Assuming not English."
                );
                return unknown_language();
            }
            None => {
                warn!("Language detection failed for the provided text snippet. Assuming not English.");
                return unknown_language();
            }
        };

        let code = short_code(detected.lang());
        let name = display_name(code);
        info!(code, name, confidence = detected.confidence(), "Detected source language");

        SourceLanguageInfo {
            is_privileged: code == PRIVILEGED_CODE,
            normalized_code: mbart_code(code).map(str::to_string),
            display_name: name.to_string(),
        }
    }
}

fn unknown_language() -> SourceLanguageInfo {
    SourceLanguageInfo {
        is_privileged: false,
        normalized_code: None,
        display_name: UNKNOWN_LANGUAGE_NAME.to_string(),
    }
}

fn leading_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// ISO 639-1 where we have one, otherwise whatlang's ISO 639-3 code.
#[must_use]
pub fn short_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Heb => "he",
        Lang::Ara => "ar",
        Lang::Deu => "de",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Ita => "it",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Pol => "pl",
        Lang::Tur => "tr",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Hin => "hi",
        other => other.code(),
    }
}

/// User-facing name. Only English and Hebrew are special-cased.
#[must_use]
pub fn display_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "he" => "Hebrew",
        other => other,
    }
}

/// mBART-50 language code for a two-letter code.
#[must_use]
pub fn mbart_code(code: &str) -> Option<&'static str> {
    let mapped = match code {
        "en" => "en_XX",
        "he" => "he_IL",
        "ar" => "ar_AR",
        "de" => "de_DE",
        "es" => "es_XX",
        "fr" => "fr_XX",
        "it" => "it_IT",
        "ru" => "ru_RU",
        "uk" => "uk_UA",
        "pt" => "pt_XX",
        "nl" => "nl_XX",
        "pl" => "pl_PL",
        "tr" => "tr_TR",
        "ja" => "ja_XX",
        "ko" => "ko_KR",
        "zh" => "zh_CN",
        "hi" => "hi_IN",
        _ => return None,
    };
    Some(mapped)
}
