//! Error type for API client calls.

use reqwest::StatusCode;
use thiserror::Error;

use super::auth::StoreError;

/// Errors surfaced by `ApiClient` calls.
///
/// Transport and JSON failures propagate the underlying error unchanged; a
/// non-2xx response becomes `Api`, carrying the service-provided `message`
/// field or the fixed fallback text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, timeout, or a response body that is not valid JSON.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Response body parsed as JSON but did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// Service answered with a non-2xx status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Token store read or write failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Caller-supplied header name or value is not valid HTTP.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}
