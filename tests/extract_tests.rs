use tldr_reader::article::extract::{extract_article_text, paragraph_texts};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Ignored title</title></head>
<body>
  <nav><a href="/">Home</a></nav>
  <article>
    <h1>Headline is not a paragraph</h1>
    <p class="lead">Rents rose   sharply
       in <a href="https://example.com/data">the capital</a> this year.</p>
    <div><p>Tenants &amp; landlords <em>both</em> blame <strong>rates</strong>.</p></div>
    <P>Upper-case tags<br/>still count.</P>
  </article>
  <footer>Copyright</footer>
</body>
</html>"#;

#[test]
fn test_extracts_paragraph_text_in_order() {
    let text = extract_article_text(PAGE);
    assert!(text.starts_with("Rents rose sharply in the capital this year."));
    assert!(text.contains("Tenants & landlords both blame rates."));
    assert!(text.ends_with("Upper-case tags still count."));
}

#[test]
fn test_non_paragraph_content_is_ignored() {
    let text = extract_article_text(PAGE);
    assert!(!text.contains("Headline"));
    assert!(!text.contains("Home"));
    assert!(!text.contains("Copyright"));
    assert!(!text.contains("https://example.com/data"));
}

#[test]
fn test_output_has_no_markup_or_runs_of_whitespace() {
    let text = extract_article_text(PAGE);
    assert!(!text.contains('<'));
    assert!(!text.contains("  "));
    assert!(!text.contains('\n'));
}

#[test]
fn test_page_without_paragraphs_yields_empty_text() {
    let html = "<html><body><div>Only divs here</div><span>and spans</span></body></html>";
    assert_eq!(extract_article_text(html), "");
    assert_eq!(extract_article_text(""), "");
}

#[test]
fn test_paragraph_texts_skip_similar_tags() {
    let html = "<pre>code</pre><param name=x><p>one</p><progress></progress><p id=\"b\">two</p>";
    assert_eq!(paragraph_texts(html), vec!["one", "two"]);
}

#[test]
fn test_hebrew_paragraphs_are_preserved() {
    let html = "<p>שלום <b>עולם</b></p><p>מה שלומך?</p>";
    assert_eq!(extract_article_text(html), "שלום עולם מה שלומך?");
}

#[test]
fn test_paragraphs_without_closing_tags() {
    let html = "<p>First paragraph of the story.<p>Second paragraph here.<p>Third one.</body>";
    assert_eq!(
        extract_article_text(html),
        "First paragraph of the story. Second paragraph here. Third one."
    );
}

#[test]
fn test_implicitly_closed_paragraphs_are_separated() {
    let html = "<p>First paragraph.<p>Second paragraph.</p>";
    assert_eq!(
        paragraph_texts(html),
        vec!["First paragraph.", "Second paragraph."]
    );
    assert_eq!(extract_article_text(html), "First paragraph. Second paragraph.");
}

#[test]
fn test_literal_angle_brackets_in_text_survive() {
    let html = "<p>Prices for x < 5 items rose. Other things > 3 fell.</p><p>Next para.</p>";
    assert_eq!(
        extract_article_text(html),
        "Prices for x < 5 items rose. Other things > 3 fell. Next para."
    );
}

#[test]
fn test_comments_and_scripts_are_not_paragraphs() {
    let html = "<!-- <p>hidden ad copy</p> --><script>var s='<p>js</p>';</script><p>Real.</p>";
    assert_eq!(extract_article_text(html), "Real.");
}
