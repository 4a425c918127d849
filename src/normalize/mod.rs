//! Markup normalization for raw model output
//!
//! Model output arrives in whatever shape the model felt like producing: fenced
//! code blocks, full `<html>` documents, bare paragraphs, or plain text. This
//! module turns it into a [`NormalizedArticle`] in three stages:
//! 1. Cleanup - trim, strip code fences, drop `<html>`/`<body>` wrapper tags
//! 2. Title - first `<h1>`, else first `<h2>`, else first `<p>`, else first text line
//! 3. Body - remove the heading the title came from, trim
//!
//! Normalization never fails loudly. Input that yields no body comes back as `None`.

use crate::types::NormalizedArticle;
use tracing::debug;

mod cleanup;
mod title;

use cleanup::clean_markup;
use title::extract_title;

pub use title::strip_tags;

/// Title used when the output contains no text at all
pub const FALLBACK_TITLE: &str = "Untitled Article";

/// Maximum characters kept from a paragraph or line before the ellipsis
pub const TITLE_MAX_CHARS: usize = 50;

/// Normalize raw model output into a title and HTML body
///
/// Returns `None` when the input is empty or nothing remains of the body once
/// the title heading is removed. A title is never returned without a body.
///
/// # Examples
///
/// ```
/// use contentforge::normalize::normalize;
///
/// let raw = "```html\n<h1>Solar Power Basics</h1>\n<p>Solar power is clean.</p>\n```";
/// let article = normalize(raw).unwrap();
/// assert_eq!(article.title, "Solar Power Basics");
/// assert_eq!(article.body, "<p>Solar power is clean.</p>");
/// ```
pub fn normalize(raw: &str) -> Option<NormalizedArticle> {
    if raw.is_empty() {
        return None;
    }

    let cleaned = clean_markup(raw);
    let found = extract_title(&cleaned);

    let body = match &found.heading {
        Some(span) => {
            let mut without = String::with_capacity(cleaned.len());
            without.push_str(&cleaned[..span.start]);
            without.push_str(&cleaned[span.end..]);
            without
        }
        None => cleaned,
    };

    let body = body.trim();
    if body.is_empty() {
        debug!(title = %found.title, "normalized output has an empty body");
        return None;
    }

    Some(NormalizedArticle {
        title: found.title,
        body: body.to_string(),
        title_source: found.source,
    })
}

/// Cut `text` to [`TITLE_MAX_CHARS`] characters, appending `...` if anything was cut
pub(crate) fn truncate_title(text: &str) -> String {
    match text.char_indices().nth(TITLE_MAX_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
