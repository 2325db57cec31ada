//! Notion page identifiers embedded in referrer URLs.
//!
//! Notion embeds send the host page URL as the referrer. The page id is the
//! trailing 32-character hex token of that URL's path, which we normalize to
//! the dashed UUID form used by the API.

use std::sync::LazyLock;

use regex::Regex;

/// URL shapes checked in order; the first match wins.
static PAGE_ID_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)notion\.so/[^/]+/([a-f0-9]{32})")
            .expect("workspace URL regex should compile"),
        Regex::new(r"(?i)notion\.so/([a-f0-9]{32})").expect("bare URL regex should compile"),
        Regex::new(r"(?i)notion\.site/[^/]+/([a-f0-9]{32})")
            .expect("public site URL regex should compile"),
    ]
});

/// Extract the page id from a referrer URL.
///
/// Returns `None` when the URL is absent or matches none of the known shapes.
pub fn extract_page_id(url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;

    PAGE_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| format_page_id(m.as_str()))
    })
}

/// Format a 32-character id as 8-4-4-4-12. Other lengths are returned as-is.
pub fn format_page_id(id: &str) -> String {
    if id.len() != 32 || !id.is_ascii() {
        return id.to_string();
    }
    format!(
        "{}-{}-{}-{}-{}",
        &id[..8],
        &id[8..12],
        &id[12..16],
        &id[16..20],
        &id[20..]
    )
}
