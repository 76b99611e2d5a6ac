//! Text clean-up and SSML rendering ahead of synthesis.

/// Characters allowed by XML 1.0 (`Char` production). Anything else makes the
/// speech service reject the whole document.
#[must_use]
pub fn is_valid_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{09}' | '\u{0A}' | '\u{0D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

#[must_use]
pub fn strip_invalid_xml_chars(text: &str) -> String {
    text.chars().filter(|&c| is_valid_xml_char(c)).collect()
}

/// Trims every line, drops invalid characters and empty lines, and joins the
/// rest with single spaces. Pauses come from punctuation, not line breaks.
#[must_use]
pub fn preprocess_text(text: &str) -> String {
    text.lines()
        .map(|line| strip_invalid_xml_chars(line.trim()))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// `he-IL-HilaNeural` → `he-IL`.
#[must_use]
pub fn voice_locale(voice: &str) -> String {
    let parts: Vec<&str> = voice.split('-').collect();
    if parts.len() >= 2 {
        format!("{}-{}", parts[0], parts[1])
    } else {
        "en-US".to_string()
    }
}

/// Wraps already-preprocessed text in a single-voice SSML document.
#[must_use]
pub fn build_ssml(text: &str, voice: &str) -> String {
    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{}'>\
         <voice name='{}'>{}</voice></speak>",
        escape_xml(&voice_locale(voice)),
        escape_xml(voice),
        escape_xml(text)
    )
}
