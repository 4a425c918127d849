//! Title stage: fallback chain from headings down to the first line of text.

use super::{FALLBACK_TITLE, truncate_title};
use crate::types::TitleSource;
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static HEADING_1: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1\s*>").expect("h1 pattern is valid")
});

#[allow(clippy::expect_used)]
static HEADING_2: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h2(?:\s[^>]*)?>(.*?)</h2\s*>").expect("h2 pattern is valid")
});

#[allow(clippy::expect_used)]
static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").expect("paragraph pattern is valid")
});

#[allow(clippy::expect_used)]
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]+>").expect("tag pattern is valid"));

/// Extracted title and where it came from
#[derive(Debug)]
pub(super) struct TitleMatch {
    pub title: String,
    pub source: TitleSource,
    /// Byte range of the heading element to cut from the body
    pub heading: Option<Range<usize>>,
}

/// Remove every markup tag from `text`
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    TAG.replace_all(text, "")
}

/// Run the title fallback chain over cleaned markup
///
/// Only the first element of each kind is considered. An element whose text
/// is empty once tags are stripped does not count and the chain moves on.
pub(super) fn extract_title(text: &str) -> TitleMatch {
    if let Some((title, span)) = first_element_text(&HEADING_1, text) {
        return TitleMatch {
            title,
            source: TitleSource::Heading1,
            heading: Some(span),
        };
    }

    if let Some((title, span)) = first_element_text(&HEADING_2, text) {
        return TitleMatch {
            title,
            source: TitleSource::Heading2,
            heading: Some(span),
        };
    }

    if let Some((title, _)) = first_element_text(&PARAGRAPH, text) {
        return TitleMatch {
            title: truncate_title(&title),
            source: TitleSource::Paragraph,
            heading: None,
        };
    }

    let plain = strip_tags(text);
    match plain.lines().map(str::trim).find(|line| !line.is_empty()) {
        Some(line) => TitleMatch {
            title: truncate_title(line),
            source: TitleSource::FirstLine,
            heading: None,
        },
        None => TitleMatch {
            title: FALLBACK_TITLE.to_string(),
            source: TitleSource::Fallback,
            heading: None,
        },
    }
}

fn first_element_text(pattern: &Regex, text: &str) -> Option<(String, Range<usize>)> {
    let caps = pattern.captures(text)?;
    let element = caps.get(0)?;
    let inner = caps.get(1)?;

    let stripped = strip_tags(inner.as_str());
    let title = stripped.trim();
    if title.is_empty() {
        return None;
    }

    Some((title.to_string(), element.range()))
}
