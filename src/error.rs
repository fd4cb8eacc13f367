//! Error types for the Pipedrive client

use std::time::Duration;
use thiserror::Error;

/// Result type alias for Pipedrive operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// API-related errors
///
/// Every transport or decoding failure surfaces as one of these variants,
/// unchanged. The client never retries on its own.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check that your API token is valid.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimited(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Local validation errors, raised before any request is made
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("You must include a \"{field}\" field when adding {resource}")]
    MissingField {
        field: &'static str,
        resource: &'static str,
    },
}
