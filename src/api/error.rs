//! Errors at the HTTP boundary

use thiserror::Error;

/// Failures of a request to the authentication service
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    /// The service answered with a non-success status
    #[error("server rejected request with status {status}")]
    Rejected { status: u16 },
    /// A success response did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The request body could not be built
    #[error("invalid request: {0}")]
    Request(String),
}

impl ApiError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
