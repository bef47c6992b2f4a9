//! Messages understood by the catalog view.
//!
//! [`CatalogIntent`]s come from the presentation layer through
//! [`CatalogClient`](crate::clients::CatalogClient). [`CatalogEvent`]s are produced by the
//! view's own background work and never leave the actor.

use crate::fetch::TransportError;
use crate::model::{Category, CategoryFilter, FetchResult, ProductId, SortOrder};

/// User intents for the catalog view.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIntent {
    /// Selects a category from the dropdown. Commits immediately.
    PickCategory(CategoryFilter),
    /// Flips ascending/descending. Commits immediately.
    ToggleSort,
    SetSort(SortOrder),
    /// Edits the search box. Commits after the debounce quiet period.
    TypeKeyword(String),
    /// Pagination control. Commits immediately.
    GoToPage(u32),
    /// Restores defaults and navigates to the bare path.
    Clear,
    /// The address bar changed outside the view (back/forward). Carries the new query.
    LocationChanged(String),
    /// Re-issues the current query, e.g. after an error.
    Reload,
    /// Opens the preview modal for a product of the visible page.
    Preview(ProductId),
    ClosePreview,
}

/// Completions of background work started by the view.
#[derive(Debug)]
pub enum CatalogEvent {
    Fetched(FetchResult),
    CategoriesLoaded(Result<Vec<Category>, TransportError>),
}
