//! Cleanup stage: whitespace, code fences and document wrapper tags.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static FENCE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^```[ \t]*[A-Za-z0-9_+-]*[ \t]*\r?\n").expect("fence open pattern is valid")
});

#[allow(clippy::expect_used)]
static FENCE_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\r?\n)```[ \t]*$").expect("fence close pattern is valid")
});

// Matches on the tag name only, so attributes and case don't matter
#[allow(clippy::expect_used)]
static WRAPPER_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:html|body)(?:\s[^>]*)?/?>").expect("wrapper tag pattern is valid")
});

/// Trim, unfence and unwrap raw model output
pub(super) fn clean_markup(raw: &str) -> String {
    let trimmed = raw.trim();

    let unfenced = if trimmed.starts_with("```") {
        let opened = FENCE_OPEN.replace(trimmed, "");
        FENCE_CLOSE.replace(&opened, "").into_owned()
    } else {
        trimmed.to_string()
    };

    WRAPPER_TAG.replace_all(&unfenced, "").into_owned()
}
