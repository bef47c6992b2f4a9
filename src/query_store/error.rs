//! Error types for reading criteria from the address bar.

use thiserror::Error;

/// A URL parameter that could not be read.
///
/// Never surfaced to the user: [`FilterCriteria::parse`](crate::model::FilterCriteria::parse)
/// recovers by substituting the field default.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CriteriaParseError {
    /// `sortby` was neither `asc` nor `desc`.
    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),

    /// `page` was not a positive integer.
    #[error("Invalid page: {0}")]
    InvalidPage(String),
}
