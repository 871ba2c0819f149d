use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single outbound fetch
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Body did not match the expected JSON schema
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("xml parse error: {0}")]
    Xml(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl FetchError {
    pub fn xml<E: std::fmt::Display>(err: E) -> Self {
        Self::Xml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
