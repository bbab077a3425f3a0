//! Errors raised by the remote search client.

use thiserror::Error;

/// Failures surfaced by a search backend call.
///
/// Transient and permanent failures are not distinguished; callers get
/// the error as-is.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, TLS or transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Search API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape
    #[error("Malformed search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
