//! Error types for the feed client
//!
//! - `ApiError`: failures talking to the gallery REST API
//! - `FeedError`: client-side failures (validation, configuration) plus wrapped API errors

use thiserror::Error;

/// Gallery API errors
///
/// The backend only signals failure through the HTTP status, so the body of
/// a non-2xx response is kept as a diagnostic message and never parsed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of a non-2xx response, if that is what failed
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}

/// Client layer errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
