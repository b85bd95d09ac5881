use thiserror::Error;

/// Pipeline failures. All are terminal for one invocation: nothing is
/// retried, and a failed fetch never produces a partial result.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("not an IMDb list URL: {0:?} (expected something like https://www.imdb.com/list/lsXXXXXXXX/)")]
    InvalidUrl(String),

    #[error("list page returned HTTP status {status}")]
    Status { status: u16 },

    #[error("failed to fetch list page: {0}")]
    Network(#[from] reqwest::Error),
}
