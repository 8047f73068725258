//! Error types for numbers API operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("fetch for index {index} rejected: {cause}")]
    Rejected { index: usize, cause: String },
}
