use thiserror::Error;

/// Failure to fetch one item from the discussion API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} for item {id}")]
    Status { id: u64, status: u16 },

    #[error("malformed item {id}: {message}")]
    Malformed { id: u64, message: String },
}
