mod common;

use common::{ENGLISH_ARTICLE, FRENCH_ARTICLE, HEBREW_ARTICLE};
use tldr_reader::ai::LanguageDetector;
use tldr_reader::ai::language::{DETECTION_SAMPLE_CHARS, UNKNOWN_LANGUAGE_NAME};

#[test]
fn test_english_article_is_privileged() {
    let info = LanguageDetector::new().detect(ENGLISH_ARTICLE);
    assert!(info.is_privileged);
    assert_eq!(info.display_name, "English");
    assert_eq!(info.normalized_code.as_deref(), Some("en_XX"));
}

#[test]
fn test_french_article_is_not_privileged() {
    let info = LanguageDetector::new().detect(FRENCH_ARTICLE);
    assert!(!info.is_privileged);
    assert_eq!(info.normalized_code.as_deref(), Some("fr_XX"));
    assert_eq!(info.display_name, "fr");
}

#[test]
fn test_hebrew_script_is_not_privileged() {
    let info = LanguageDetector::new().detect(HEBREW_ARTICLE);
    assert!(!info.is_privileged);
    assert_ne!(info.display_name, "English");
}

#[test]
fn test_detection_is_deterministic() {
    let detector = LanguageDetector::new();
    let first = detector.detect(FRENCH_ARTICLE);
    for _ in 0..5 {
        assert_eq!(detector.detect(FRENCH_ARTICLE), first);
    }
}

#[test]
fn test_undetectable_text_falls_back_to_unknown() {
    let detector = LanguageDetector::new();
    for text in ["", "   ", "1234 5678 90"] {
        let info = detector.detect(text);
        assert!(!info.is_privileged, "{text:?} should not be privileged");
        assert_eq!(info.normalized_code, None);
        assert_eq!(info.display_name, UNKNOWN_LANGUAGE_NAME);
    }
}

#[test]
fn test_short_or_ambiguous_text_falls_back_to_unknown() {
    let detector = LanguageDetector::new();
    for text in ["Hi", "OK", "Breaking news today"] {
        let info = detector.detect(text);
        assert!(!info.is_privileged, "{text:?} should not be privileged");
        assert_eq!(info.normalized_code, None, "{text:?} got a language code");
        assert_eq!(info.display_name, UNKNOWN_LANGUAGE_NAME);
    }
}

#[test]
fn test_only_leading_characters_are_inspected() {
    let mut text = String::new();
    while text.chars().count() < DETECTION_SAMPLE_CHARS {
        text.push_str(ENGLISH_ARTICLE);
        text.push(' ');
    }
    let text: String = text.chars().take(DETECTION_SAMPLE_CHARS).collect();
    let padded = format!("{text}{}", FRENCH_ARTICLE.repeat(10));

    let info = LanguageDetector::new().detect(&padded);
    assert!(info.is_privileged);
}
