//! Scraper for public IMDb list pages: one fetch, one extraction pass,
//! no API key.

pub mod error;
pub mod fetcher;
pub mod parser;

use serde::Deserialize;

pub use error::ScrapeError;
pub use parser::ListItem;

/// Host-facing configuration. One recognized option: the list-page URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    pub url: String,
}

/// Full pipeline: fetch the list page, then extract its entries.
///
/// One outbound GET per call; extraction itself is pure and synchronous.
/// Errors are terminal and render as end-user messages via `Display`; a
/// failed fetch never yields a partial result.
pub async fn load_list_items(params: &ListParams) -> Result<Vec<ListItem>, ScrapeError> {
    let html = fetcher::fetch_list_page(&params.url).await?;
    Ok(parser::extract_items(&html))
}
