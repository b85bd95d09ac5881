pub mod blocks;
pub mod fields;

use serde::Serialize;
use tracing::debug;

/// One extracted list entry, in the exact shape the host renderer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ListItem {
    pub id: String,
    pub title: String,
    pub year: String,
    pub image: String,
    pub url: String,
}

/// Two-pass pipeline: html → item blocks → one record per block with a
/// title id. Blocks without an id are dropped; any other missing field
/// degrades to its default. Output order follows document order, with no
/// sorting and no dedup.
pub fn extract_items(html: &str) -> Vec<ListItem> {
    let blocks = blocks::item_blocks(html);
    let items: Vec<ListItem> = blocks.iter().copied().filter_map(extract_one).collect();
    if items.len() < blocks.len() {
        debug!(
            "Dropped {} block(s) without a title id",
            blocks.len() - items.len()
        );
    }
    items
}

fn extract_one(block: &str) -> Option<ListItem> {
    let id = fields::title_id(block)?;
    Some(ListItem {
        id: id.to_string(),
        title: fields::title(block),
        year: fields::year(block),
        image: fields::image(block),
        url: format!("https://www.imdb.com/title/{}/", id),
    })
}

// ── Tests ──
