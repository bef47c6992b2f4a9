//! Catalog listing view: query state, URL sync and product fetching.

pub mod entity;
pub mod error;
pub mod intents;

pub use entity::*;
pub use error::*;
pub use intents::*;

use crate::clients::CatalogClient;
use crate::framework::ViewActor;
use crate::lifecycle::CatalogConfig;
use crate::navigation::AddressBar;
use crate::transport::{CategorySource, ProductSource};
use std::sync::Arc;

/// Collaborators injected into the catalog view when its actor starts.
#[derive(Clone)]
pub struct CatalogContext {
    pub address_bar: Arc<dyn AddressBar>,
    pub products: Arc<dyn ProductSource>,
    pub categories: Arc<dyn CategorySource>,
}

impl CatalogContext {
    pub fn new(
        address_bar: Arc<dyn AddressBar>,
        products: Arc<dyn ProductSource>,
        categories: Arc<dyn CategorySource>,
    ) -> Self {
        Self {
            address_bar,
            products,
            categories,
        }
    }

    /// Uses one backend for both products and categories.
    pub fn with_backend<B>(address_bar: Arc<dyn AddressBar>, backend: Arc<B>) -> Self
    where
        B: ProductSource + CategorySource + 'static,
    {
        Self::new(address_bar, backend.clone(), backend)
    }
}

/// Creates a new catalog view actor and its client.
pub fn new(config: &CatalogConfig) -> (ViewActor<CatalogView>, CatalogClient) {
    let (actor, generic_client) = ViewActor::new(CatalogView::new(config), config.mailbox_capacity.max(1));
    let client = CatalogClient::new(generic_client);

    (actor, client)
}
