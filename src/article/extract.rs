//! Paragraph-based article text extraction.
//!
//! The page is parsed as an HTML5 document and the text of every `<p>` element
//! is collected. Works for most news sites and blogs; pages that do not use
//! paragraphs for body text yield nothing.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("static selector parse"));

/// Returns the whitespace-normalized text of every non-empty paragraph, in
/// document order.
#[must_use]
pub fn paragraph_texts(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&PARAGRAPH_SELECTOR)
        .map(|paragraph| normalize_whitespace(&element_text(paragraph)))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Extracts the readable article text from `html`, whitespace-normalized.
/// Returns an empty string when the page has no paragraph text.
#[must_use]
pub fn extract_article_text(html: &str) -> String {
    paragraph_texts(html).join(" ")
}

/// Concatenates the text nodes under `element`; `<br>` counts as a space.
fn element_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(fragment) => text.push_str(fragment),
            Node::Element(el) if el.name() == "br" => text.push(' '),
            _ => {}
        }
    }
    text
}

#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
