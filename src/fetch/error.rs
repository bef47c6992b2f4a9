//! Error types reported by the listing and category collaborators.

use thiserror::Error;

/// A transport or server failure.
///
/// The display string is what the product grid shows, verbatim.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// The server answered with an error message.
    #[error("{0}")]
    Server(String),

    /// The request never reached the server.
    #[error("Network error: {0}")]
    Network(String),
}
