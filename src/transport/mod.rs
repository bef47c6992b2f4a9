//! Collaborators that talk to the catalog backend.
//!
//! The engine only depends on these traits. [`InMemoryCatalog`] serves a fixed product list
//! (demo, integration tests); [`mock::MockProductSource`] scripts responses for unit tests.

pub mod in_memory;
pub mod mock;

pub use in_memory::*;

use crate::fetch::TransportError;
use crate::model::{Category, ListingQuery, ProductPage};
use async_trait::async_trait;

/// Product-listing collaborator. Retries, if any, belong here rather than in the engine.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self, query: &ListingQuery) -> Result<ProductPage, TransportError>;
}

/// Supplies the entries of the category dropdown.
#[async_trait]
pub trait CategorySource: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<Category>, TransportError>;
}
