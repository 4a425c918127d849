use super::*;
use crate::types::TitleSource;

#[test]
fn fenced_document_yields_heading_title_and_body() {
    let raw = "```html\n<h1>Solar Power Basics</h1>\n<p>Solar power is clean.</p>\n```";
    let article = normalize(raw).unwrap();

    assert_eq!(article.title, "Solar Power Basics");
    assert_eq!(article.body, "<p>Solar power is clean.</p>");
    assert_eq!(article.title_source, TitleSource::Heading1);
}

#[test]
fn unterminated_fence_still_loses_its_opening_line() {
    let article = normalize("```html\n<h1>T</h1><p>b</p>").unwrap();
    assert_eq!(article.title, "T");
    assert_eq!(article.body, "<p>b</p>");
}

#[test]
fn spaced_language_tag_is_fully_unfenced() {
    let article = normalize("``` html\n<h1>T</h1><p>b</p>\n```").unwrap();
    assert_eq!(article.title, "T");
    assert_eq!(article.body, "<p>b</p>");
}

#[test]
fn empty_input_is_rejected() {
    assert!(normalize("").is_none());
    assert!(normalize("   \n\t  ").is_none());
}

#[test]
fn heading_without_body_is_rejected() {
    assert!(normalize("<h1>Only A Title</h1>").is_none());
    assert!(normalize("```html\n<h1>Only A Title</h1>\n```").is_none());
}

#[test]
fn empty_fenced_block_is_rejected() {
    assert!(normalize("```html\n```").is_none());
}

#[test]
fn multiline_heading_with_attributes_and_inline_tags() {
    let raw = "<h1 class=\"title\">\n  <strong>Bold</strong> Title\n</h1>\n<p>Body text.</p>";
    let article = normalize(raw).unwrap();

    assert_eq!(article.title, "Bold Title");
    assert_eq!(article.body, "<p>Body text.</p>");
}

#[test]
fn uppercase_heading_tags_are_matched() {
    let article = normalize("<H1>Loud</H1><p>quiet</p>").unwrap();
    assert_eq!(article.title, "Loud");
    assert_eq!(article.body, "<p>quiet</p>");
}

#[test]
fn second_level_heading_is_used_when_no_h1() {
    let raw = "<h2>First Section</h2><p>Intro.</p><h2>Second Section</h2><p>More.</p>";
    let article = normalize(raw).unwrap();

    assert_eq!(article.title, "First Section");
    assert_eq!(article.title_source, TitleSource::Heading2);
    assert_eq!(
        article.body,
        "<p>Intro.</p><h2>Second Section</h2><p>More.</p>"
    );
}

#[test]
fn only_the_first_h1_is_removed() {
    let article = normalize("<h1>One</h1><p>a</p><h1>Two</h1>").unwrap();
    assert_eq!(article.title, "One");
    assert_eq!(article.body, "<p>a</p><h1>Two</h1>");
}

#[test]
fn empty_h1_falls_through_to_h2() {
    let article = normalize("<h1><span></span></h1><h2>Real</h2><p>x</p>").unwrap();
    assert_eq!(article.title, "Real");
    assert_eq!(article.title_source, TitleSource::Heading2);
    assert_eq!(article.body, "<h1><span></span></h1><p>x</p>");
}

#[test]
fn document_wrapper_tags_are_dropped() {
    let raw = "<HTML lang=\"en\"><body class=\"post\"><h1>T</h1><p>b</p></BODY></html>";
    let article = normalize(raw).unwrap();

    assert_eq!(article.title, "T");
    assert_eq!(article.body, "<p>b</p>");
}

#[test]
fn long_paragraph_title_is_truncated() {
    let raw = "<p>Just some text with no heading at all that runs long enough to exceed fifty characters for sure</p>";
    let article = normalize(raw).unwrap();

    assert_eq!(
        article.title,
        "Just some text with no heading at all that runs lo..."
    );
    assert_eq!(article.title_source, TitleSource::Paragraph);
    // paragraph titles leave the body untouched
    assert_eq!(article.body, raw);
}

#[test]
fn title_of_exactly_fifty_chars_has_no_ellipsis() {
    let text = "a".repeat(TITLE_MAX_CHARS);
    let article = normalize(&format!("<p>{text}</p>")).unwrap();
    assert_eq!(article.title, text);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let text = "é".repeat(60);
    let article = normalize(&format!("<p>{text}</p>")).unwrap();

    assert_eq!(article.title, format!("{}...", "é".repeat(50)));
    assert_eq!(article.title.chars().count(), 53);
}

#[test]
fn plain_text_uses_first_non_blank_line() {
    let raw = "\n\n  First real line  \nSecond line of text.";
    let article = normalize(raw).unwrap();

    assert_eq!(article.title, "First real line");
    assert_eq!(article.title_source, TitleSource::FirstLine);
    assert_eq!(article.body, "First real line  \nSecond line of text.");
}

#[test]
fn preformatted_block_is_not_a_paragraph() {
    let article = normalize("<pre>let x = 1;</pre>").unwrap();
    assert_eq!(article.title, "let x = 1;");
    assert_eq!(article.title_source, TitleSource::FirstLine);
    assert_eq!(article.body, "<pre>let x = 1;</pre>");
}

#[test]
fn markup_without_text_gets_fallback_title() {
    let article = normalize("<img src=\"cover.png\">").unwrap();
    assert_eq!(article.title, FALLBACK_TITLE);
    assert_eq!(article.title_source, TitleSource::Fallback);
    assert_eq!(article.body, "<img src=\"cover.png\">");
}

#[test]
fn normalizing_a_body_again_keeps_it_stable() {
    let first = normalize("<h1>Solar Power Basics</h1>\n<p>Solar power is clean.</p>").unwrap();
    let second = normalize(&first.body).unwrap();

    assert_eq!(second.body, first.body);
    assert_eq!(second.title, "Solar power is clean.");
    assert_eq!(second.title_source, TitleSource::Paragraph);
}

#[test]
fn titles_never_contain_markup() {
    let inputs = [
        "<h1><a href=\"/x\">Linked</a> heading</h1><p>b</p>",
        "<h2><em>Em</em></h2><p>b</p>",
        "<p class=\"lead\"><b>Bold</b> lead</p>",
        "<div><span>Nested</span> text</div>",
        "<section></section>",
    ];

    for raw in inputs {
        let article = normalize(raw).unwrap();
        assert!(!article.title.is_empty(), "empty title for {raw:?}");
        assert!(
            !article.title.contains('<') && !article.title.contains('>'),
            "markup in title {:?} for {raw:?}",
            article.title
        );
        assert!(!article.body.is_empty());
    }
}

