use catalog_query::catalog_actor::{CatalogContext, CatalogError};
use catalog_query::clients::ActorClient;
use catalog_query::lifecycle::{CatalogConfig, CatalogSystem};
use catalog_query::model::{CatalogSnapshot, CategoryFilter, FilterCriteria, Product, SortOrder};
use catalog_query::navigation::MemoryAddressBar;
use catalog_query::transport::InMemoryCatalog;
use std::sync::Arc;
use std::time::Duration;

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_page_size(2)
        .with_latency(Duration::from_millis(20))
        .with_product("Shoes", Product::new(1, "Trail Shoe", 120.0, 3))
        .with_product("Shoes", Product::new(2, "Road Shoe", 90.0, 0))
        .with_product("Shoes", Product::new(3, "Shoe Horn", 8.0, 40))
        .with_product("Books", Product::new(4, "Running Book", 25.0, 7))
        .with_product("Books", Product::new(5, "Cook Book", 30.0, 2))
}

fn names(snapshot: &CatalogSnapshot) -> Vec<String> {
    snapshot
        .listing
        .page()
        .map(|page| page.products.iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default()
}

async fn settled(system: &CatalogSystem) -> CatalogSnapshot {
    let client = &system.catalog_client;
    client.snapshot().await.expect("view stopped");
    let mut updates = client.subscribe();
    let snapshot = updates
        .wait_for(|snapshot| !snapshot.phase.is_pending())
        .await
        .expect("view stopped");
    snapshot.clone()
}

/// Full session against the in-memory backend, from a shared link to Clear.
#[tokio::test(start_paused = true)]
async fn test_full_browsing_session() {
    let bar = Arc::new(MemoryAddressBar::new("/products?category=Shoes&sortby=desc"));
    let context = CatalogContext::with_backend(bar.clone(), Arc::new(catalog()));
    let system = CatalogSystem::mount(&CatalogConfig::default(), context);
    let client = system.catalog_client.clone();

    // Shared link: most expensive shoes first, two per page
    let snapshot = settled(&system).await;
    assert_eq!(names(&snapshot), vec!["Trail Shoe", "Road Shoe"]);
    let pagination = snapshot.listing.page().unwrap().pagination;
    assert_eq!(pagination.total_pages, 2);
    assert_eq!(pagination.total_elements, 3);
    let categories: Vec<_> = snapshot
        .categories
        .iter()
        .map(|c| c.category_name.as_str())
        .collect();
    assert_eq!(categories, vec!["Books", "Shoes"]);

    // Next page
    client.go_to_page(2).await.unwrap();
    assert_eq!(bar.location(), "/products?category=Shoes&sortby=desc&page=2");
    assert_eq!(names(&settled(&system).await), vec!["Shoe Horn"]);

    // Sorting returns to page 1
    let committed = client.toggle_sort().await.unwrap();
    assert_eq!(committed.sort_order, SortOrder::Asc);
    assert_eq!(committed.page, 1);
    assert_eq!(names(&settled(&system).await), vec!["Shoe Horn", "Road Shoe"]);

    // Search across all categories
    client.pick_category("all").await.unwrap();
    client.type_keyword("book").await.unwrap();
    tokio::time::sleep(Duration::from_millis(750)).await;
    let snapshot = settled(&system).await;
    assert_eq!(snapshot.criteria.category, CategoryFilter::All);
    assert_eq!(snapshot.criteria.keyword, "book");
    assert_eq!(names(&snapshot), vec!["Running Book", "Cook Book"]);
    assert_eq!(bar.location(), "/products?sortby=asc&keyword=book");

    // Clear
    client.clear().await.unwrap();
    let snapshot = settled(&system).await;
    assert_eq!(snapshot.criteria, FilterCriteria::default());
    assert_eq!(names(&snapshot), vec!["Shoe Horn", "Running Book"]);
    assert_eq!(bar.location(), "/products");

    assert_eq!(
        bar.history(),
        vec![
            "/products?category=Shoes&sortby=desc",
            "/products?category=Shoes&sortby=desc&page=2",
            "/products?category=Shoes&sortby=asc",
            "/products?sortby=asc",
            "/products?sortby=asc&keyword=book",
            "/products",
        ]
    );

    system.unmount().await.expect("Failed to unmount");
}

/// A reloaded page reproduces the listing of the link it was loaded from.
#[tokio::test(start_paused = true)]
async fn test_reload_from_written_url_reproduces_listing() {
    let bar = Arc::new(MemoryAddressBar::new("/products"));
    let context = CatalogContext::with_backend(bar.clone(), Arc::new(catalog()));
    let first = CatalogSystem::mount(&CatalogConfig::default(), context);
    settled(&first).await;

    first.catalog_client.pick_category("Books").await.unwrap();
    first.catalog_client.set_sort(SortOrder::Desc).await.unwrap();
    let before = settled(&first).await;
    first.unmount().await.unwrap();

    let reloaded = Arc::new(MemoryAddressBar::new(bar.location()));
    let context = CatalogContext::with_backend(reloaded.clone(), Arc::new(catalog()));
    let second = CatalogSystem::mount(&CatalogConfig::default(), context);
    let after = settled(&second).await;

    assert_eq!(after.criteria, before.criteria);
    assert_eq!(names(&after), names(&before));
    assert_eq!(names(&after), vec!["Cook Book", "Running Book"]);
    assert_eq!(reloaded.navigations(), 0);

    second.unmount().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_malformed_link_falls_back_to_defaults() {
    let bar = Arc::new(MemoryAddressBar::new("/products?sortby=sideways&page=-4&category="));
    let context = CatalogContext::with_backend(bar.clone(), Arc::new(catalog()));
    let system = CatalogSystem::mount(&CatalogConfig::default(), context);

    let snapshot = settled(&system).await;
    assert_eq!(snapshot.criteria, FilterCriteria::default());
    assert_eq!(names(&snapshot), vec!["Shoe Horn", "Running Book"]);

    system.unmount().await.unwrap();
}

#[tokio::test]
async fn test_client_after_unmount_reports_communication_error() {
    let bar = Arc::new(MemoryAddressBar::default());
    let context = CatalogContext::with_backend(bar, Arc::new(catalog()));
    let system = CatalogSystem::mount(&CatalogConfig::default(), context);
    let client = system.catalog_client.clone();

    system.unmount().await.unwrap();

    let err = client.toggle_sort().await.unwrap_err();
    assert!(matches!(err, CatalogError::ActorCommunicationError(_)));
}
