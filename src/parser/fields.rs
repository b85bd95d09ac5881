use std::sync::LazyLock;

use regex::Regex;

static TITLE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/title/(tt\d{7,8})/").unwrap());
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h3[^>]*>\s*<a[^>]*>([^<]+)</a>").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="lister-item-year text-muted unbold">([^<]+)</span>"#).unwrap()
});
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]+src="([^"]+)""#).unwrap());

/// Fallback when a block has no parseable heading anchor.
pub const UNKNOWN_TITLE: &str = "unknown title";

/// Title reference id ("tt" + 7-8 digits) from the first /title/ link.
/// The one required field: a block without it yields no record.
pub fn title_id(block: &str) -> Option<&str> {
    TITLE_ID_RE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Display title from the first heading anchor, trimmed.
pub fn title(block: &str) -> String {
    TITLE_RE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

/// Release year from the muted year span, digits only: "(1994)" → "1994",
/// "(2019– )" → "2019". Empty when the span is absent. Whatever digits
/// remain are kept as-is.
pub fn year(block: &str) -> String {
    YEAR_RE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().chars().filter(char::is_ascii_digit).collect())
        .unwrap_or_default()
}

/// `src` of the first image in the block, typically the poster thumbnail.
pub fn image(block: &str) -> String {
    IMAGE_RE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
