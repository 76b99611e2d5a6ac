//! Language detection, model collaborators and the processing pipeline

pub mod budget;
pub mod inference;
pub mod language;
pub mod orchestrator;
pub mod summarizer;
pub mod translator;
pub mod truncation;

// Re-export main types for convenience
pub use language::LanguageDetector;
pub use orchestrator::{AiProcessor, ProcessorInitState};
pub use summarizer::{EnglishSummarizer, Summarizer};
pub use translator::{HebrewTranslator, Translator};
