use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages a caller may request as the final output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    /// The privileged language: both models are trained on it.
    #[serde(rename = "en")]
    English,
    #[serde(rename = "he")]
    Hebrew,
}

pub const SUPPORTED_TARGET_LANGS: [TargetLanguage; 2] =
    [TargetLanguage::English, TargetLanguage::Hebrew];

impl TargetLanguage {
    pub const PRIVILEGED: TargetLanguage = TargetLanguage::English;

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_TARGET_LANGS
            .into_iter()
            .find(|lang| lang.code() == code)
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            TargetLanguage::English => "en",
            TargetLanguage::Hebrew => "he",
        }
    }

    #[must_use]
    pub fn is_privileged(self) -> bool {
        self == Self::PRIVILEGED
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Requested verbosity of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLevel {
    Short,
    #[default]
    Medium,
    Long,
}

pub const SUMMARY_LEVELS: [SummaryLevel; 3] =
    [SummaryLevel::Short, SummaryLevel::Medium, SummaryLevel::Long];

impl SummaryLevel {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        SUMMARY_LEVELS.into_iter().find(|level| level.as_str() == name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SummaryLevel::Short => "short",
            SummaryLevel::Medium => "medium",
            SummaryLevel::Long => "long",
        }
    }
}

impl fmt::Display for SummaryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum and maximum summary length, in model tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBudget {
    pub min_length: u32,
    pub max_length: u32,
}

/// What the detector concluded about an article's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLanguageInfo {
    pub is_privileged: bool,
    /// mBART-style code (`en_XX`), `None` when detection failed or the language is unmapped.
    pub normalized_code: Option<String>,
    pub display_name: String,
}

/// Body of `POST /api/process-url`.
///
/// Language and level stay as raw strings so the orchestrator can reject them
/// with a message naming the offending value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessUrlRequest {
    pub url: String,
    pub target_lang: String,
    #[serde(default = "default_summary_level")]
    pub summary_level: String,
}

fn default_summary_level() -> String {
    SummaryLevel::default().as_str().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedArticle {
    pub processed_text: String,
    pub detected_language: String,
}

/// Body of `POST /api/synthesize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub voice: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_language_codes() {
        assert_eq!(TargetLanguage::from_code("en"), Some(TargetLanguage::English));
        assert_eq!(TargetLanguage::from_code("he"), Some(TargetLanguage::Hebrew));
        assert_eq!(TargetLanguage::from_code("fr"), None);
        assert_eq!(TargetLanguage::from_code("EN"), None);
        assert!(TargetLanguage::English.is_privileged());
        assert!(!TargetLanguage::Hebrew.is_privileged());
    }

    #[test]
    fn test_summary_level_names() {
        for level in SUMMARY_LEVELS {
            assert_eq!(SummaryLevel::from_name(level.as_str()), Some(level));
        }
        assert_eq!(SummaryLevel::from_name("huge"), None);
        assert_eq!(SummaryLevel::default(), SummaryLevel::Medium);
    }

    #[test]
    fn test_process_request_defaults_to_medium() {
        let req: ProcessUrlRequest =
            serde_json::from_str(r#"{"url":"https://example.com","target_lang":"he"}"#).unwrap();
        assert_eq!(req.summary_level, "medium");
    }
}
