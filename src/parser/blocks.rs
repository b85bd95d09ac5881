use std::sync::LazyLock;

use regex::Regex;

// Each list entry sits in <div class="lister-item mode-detail"> … </div></div>.
// The non-greedy body stops at the first double close, which keeps consecutive
// entries from merging. A truncated trailing entry has no closing pair and
// simply never matches.
static ITEM_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="lister-item mode-detail">(.*?)</div>\s*</div>"#).unwrap()
});

/// Split a list page into per-item block substrings, in document order.
pub fn item_blocks(html: &str) -> Vec<&str> {
    ITEM_BLOCK_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}
