//! Utility functions for naming uploaded files

/// Stem used when a title has no characters that survive sanitizing
const FALLBACK_MEDIA_STEM: &str = "featured-image";

/// Derive a filesystem-safe `.png` file name from an article title
///
/// Spaces become `-`, every character outside `[A-Za-z0-9_-]` is dropped and
/// the result is lowercased.
///
/// # Examples
///
/// ```
/// use contentforge::utils::media_filename;
///
/// assert_eq!(media_filename("Solar Power: The Basics!"), "solar-power-the-basics.png");
/// ```
pub fn media_filename(title: &str) -> String {
    let stem: String = title
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase();

    if stem.is_empty() {
        format!("{FALLBACK_MEDIA_STEM}.png")
    } else {
        format!("{stem}.png")
    }
}
