use tracing::info;

use crate::error::ScrapeError;

/// Substring that marks a supported list-page URL.
const LIST_URL_MARKER: &str = "imdb.com/list/";

/// Fetch the raw HTML of a list page.
///
/// The URL is validated before any I/O: anything that does not look like an
/// IMDb list URL is rejected without a network call. One GET per call, no
/// retry, no custom headers; redirects are whatever the transport does by
/// default. A non-success status fails without reading the body further.
pub async fn fetch_list_page(url: &str) -> Result<String, ScrapeError> {
    if url.is_empty() || !url.contains(LIST_URL_MARKER) {
        return Err(ScrapeError::InvalidUrl(url.to_string()));
    }

    info!("Fetching list page: {}", url);
    let client = reqwest::Client::new();
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}
