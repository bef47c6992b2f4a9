//! Error types for the catalog view.

use crate::lifecycle::ConfigError;
use thiserror::Error;

/// Errors surfaced to callers of the catalog engine.
///
/// Transport failures are not here: they are part of the published state
/// ([`Listing::Error`](crate::model::Listing::Error)), not of the call that triggered them.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An error occurred while communicating with the view actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
