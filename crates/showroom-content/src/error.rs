//! Content API error types.

use thiserror::Error;

/// Errors from the content API.
///
/// `NotFound` is kept apart from the failure variants: callers normalize
/// it to an empty result, everything else is a fetch failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// No object matched (HTTP 404, or an empty single-object lookup).
    #[error("No matching objects")]
    NotFound,

    /// Non-success HTTP status.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// The request could not be sent or the response not received.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body is not the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ContentError {
    /// Whether this is the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        ContentError::Decode(e.to_string())
    }
}
