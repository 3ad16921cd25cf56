//! URL utilities for safe link and image targets
//!
//! Every `href` and `src` the renderer emits goes through [`sanitize_href`],
//! so message content can never smuggle script-bearing URLs into the output.

use url::Url;

/// Neutral target substituted for rejected URLs.
pub const UNSAFE_URL_PLACEHOLDER: &str = "#";

const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Return the trimmed URL when it is safe to emit, or `#` otherwise.
///
/// Accepted: in-page anchors, absolute `http`/`https`/`mailto`/`tel` URLs,
/// and strings starting with `mailto:`, `tel:` or `/` even when they do not
/// parse as absolute URLs.
///
/// # Examples
///
/// ```
/// use chatmark::utils::url::sanitize_href;
///
/// assert_eq!(sanitize_href("  https://example.com/x "), "https://example.com/x");
/// assert_eq!(sanitize_href("/relative/path"), "/relative/path");
/// assert_eq!(sanitize_href("javascript:alert(1)"), "#");
/// ```
pub fn sanitize_href(candidate: &str) -> String {
    let trimmed = candidate.trim();

    if trimmed.starts_with('#') {
        return trimmed.to_string();
    }

    if let Ok(parsed) = Url::parse(trimmed) {
        if ALLOWED_SCHEMES.contains(&parsed.scheme()) {
            return trimmed.to_string();
        }
        return UNSAFE_URL_PLACEHOLDER.to_string();
    }

    if trimmed.starts_with("mailto:") || trimmed.starts_with("tel:") || trimmed.starts_with('/') {
        return trimmed.to_string();
    }

    UNSAFE_URL_PLACEHOLDER.to_string()
}
