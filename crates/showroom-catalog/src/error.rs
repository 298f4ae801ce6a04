//! Catalog error types.

use showroom_content::ContentError;
use thiserror::Error;

/// Errors raised by data access.
///
/// Not-found never appears here; it is normalized to an empty list or
/// `None` before a caller sees it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The content API call failed.
    #[error("failed to fetch `{entity}`")]
    Fetch {
        entity: String,
        #[source]
        source: ContentError,
    },

    /// A single record came back but does not have the expected shape.
    #[error("invalid `{entity}` record: {message}")]
    Decode { entity: String, message: String },
}

impl CatalogError {
    /// What was being fetched.
    pub fn entity(&self) -> &str {
        match self {
            Self::Fetch { entity, .. } | Self::Decode { entity, .. } => entity,
        }
    }
}
