//! # Catalog Query Demo
//!
//! Mounts the catalog view over an in-memory backend and an in-memory address bar, then
//! scripts a browsing session:
//! 1.  Opening the listing from a shared link.
//! 2.  Picking a category, searching and sorting.
//! 3.  Paging, previewing a product, going back and clearing everything.
//!
//! Each step logs the resulting URL and listing. Timings come from `catalog.toml` in the
//! working directory when present.

use catalog_query::catalog_actor::{CatalogContext, CatalogError};
use catalog_query::clients::{ActorClient, CatalogClient};
use catalog_query::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use catalog_query::model::{CatalogSnapshot, Product};
use catalog_query::navigation::{split_location, MemoryAddressBar};
use catalog_query::transport::InMemoryCatalog;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), CatalogError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = CatalogConfig::load("catalog.toml")?;
    info!(?config, "Starting catalog demo");

    let address_bar = Arc::new(MemoryAddressBar::new("/products?sortby=desc"));
    let context = CatalogContext::with_backend(address_bar.clone(), Arc::new(demo_catalog()));
    let system = CatalogSystem::mount(&config, context);
    let client = &system.catalog_client;

    let snapshot = settled(client).await?;
    report("initial", &address_bar, &snapshot);

    let span = tracing::info_span!("browsing");
    async {
        client.pick_category("Books").await?;
        report("category", &address_bar, &settled(client).await?);

        // Typed quickly: a single commit once typing pauses
        for draft in ["ru", "rus", "rust"] {
            client.type_keyword(draft).await?;
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(config.debounce() + Duration::from_millis(50)).await;
        report("keyword", &address_bar, &settled(client).await?);

        client.toggle_sort().await?;
        report("sort", &address_bar, &settled(client).await?);

        Ok::<_, CatalogError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("paging");
    async {
        client.pick_category("all").await?;
        client.go_to_page(2).await?;
        let snapshot = settled(client).await?;
        report("page 2", &address_bar, &snapshot);

        if let Some(first) = snapshot.listing.page().and_then(|page| page.products.first()) {
            client.preview(first.id).await?;
            if let Some(product) = client.snapshot().await?.preview {
                info!(product = %product.name, price = product.special_price, "Previewing");
            }
            client.close_preview().await?;
        }

        // Browser back button
        if let Some(location) = address_bar.back() {
            let (_, query) = split_location(&location);
            client.location_changed(query).await?;
            report("back", &address_bar, &settled(client).await?);
        }

        client.clear().await?;
        report("clear", &address_bar, &settled(client).await?);

        Ok::<_, CatalogError>(())
    }
    .instrument(span)
    .await?;

    system.unmount().await?;

    info!(navigations = address_bar.navigations(), "Demo completed successfully");
    Ok(())
}

/// Waits until the latest request has resolved or failed.
async fn settled(client: &CatalogClient) -> Result<CatalogSnapshot, CatalogError> {
    // The round trip guarantees the view has mounted
    client.snapshot().await?;
    let mut updates = client.subscribe();
    let snapshot = updates
        .wait_for(|snapshot| !snapshot.phase.is_pending())
        .await
        .map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))?
        .clone();
    Ok(snapshot)
}

fn report(step: &str, address_bar: &MemoryAddressBar, snapshot: &CatalogSnapshot) {
    let location = address_bar.location();
    match (snapshot.listing.page(), snapshot.listing.error()) {
        (Some(page), _) => {
            let names: Vec<&str> = page.products.iter().map(|p| p.name.as_str()).collect();
            info!(
                step,
                %location,
                total = page.pagination.total_elements,
                pages = page.pagination.total_pages,
                ?names,
                "Listing"
            );
        }
        (None, Some(error)) => warn!(step, %location, error, "Listing failed"),
        (None, None) => info!(step, %location, "Listing empty"),
    }
}

fn demo_catalog() -> InMemoryCatalog {
    let books = [
        ("The Rust Programming Language", 39.0),
        ("Rust for Rustaceans", 44.5),
        ("Programming Rust", 59.9),
        ("Zero To Production In Rust", 35.0),
        ("Designing Data-Intensive Applications", 47.0),
    ];
    let gear = [
        ("Mechanical Keyboard", 129.0),
        ("Ferris Plush", 19.9),
        ("Standing Desk", 449.0),
        ("Noise-Cancelling Headphones", 299.0),
        ("USB-C Dock", 89.0),
        ("Monitor Arm", 79.0),
        ("Desk Mat", 24.0),
    ];

    let mut catalog = InMemoryCatalog::new()
        .with_page_size(4)
        .with_latency(Duration::from_millis(120));
    let mut next_id = 1u64;
    for (category, items) in [("Books", &books[..]), ("Gear", &gear[..])] {
        for (name, price) in items {
            catalog = catalog.with_product(
                category,
                Product::new(next_id, *name, *price, 10).with_discount(10.0),
            );
            next_id += 1;
        }
    }
    catalog
}
