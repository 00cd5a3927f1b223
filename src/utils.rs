use tracing::warn;

const PATH_MARKER: &str = "articles";
const SITE_MARKER: &str = "nature";

/// Plain substring check, not a URL parse.
pub fn validate_url(url: &str) -> bool {
    if !url.contains(PATH_MARKER) || !url.contains(SITE_MARKER) {
        warn!("Invalid page! {}", url);
        return false;
    }
    true
}

/// Strips ASCII punctuation except `_`, the character spaces are mapped to,
/// so that sanitizing a sanitized title is a no-op.
pub fn remove_punctuation(text: &str) -> String {
    text.chars()
        .filter(|&c| c == '_' || !c.is_ascii_punctuation())
        .collect()
}

pub fn file_name_from_title(title: &str) -> String {
    title.replace(' ', "_")
}

/// Punctuation is removed before spaces are substituted, so `"A - B"`
/// becomes `"A__B"`.
pub fn sanitize_title(title: &str) -> String {
    file_name_from_title(&remove_punctuation(title))
}
