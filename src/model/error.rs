//! Errors reported by the movie data source

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network failure: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("request failed with status {status}")]
    Status { status: u16 },
    /// The body was not the JSON shape we expected
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => ApiError::Status { status: status.as_u16() },
            // Request URLs carry the API key, so it is stripped before the text is kept
            None => ApiError::Network(e.without_url().to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Malformed(e.to_string())
    }
}
