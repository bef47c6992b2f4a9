use super::{Category, FetchPhase, FilterCriteria, Listing, Product};

/// Everything the presentation layer needs to render the catalog view.
///
/// Published after every update pass; renderers never reach into the engine directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogSnapshot {
    /// The committed criteria, mirrored in the URL.
    pub criteria: FilterCriteria,
    /// Text currently in the search box, possibly not yet committed.
    pub draft_keyword: String,
    pub phase: FetchPhase,
    pub listing: Listing,
    /// Whether the busy indicator should be drawn.
    pub busy: bool,
    /// Dropdown entries, sorted by name.
    pub categories: Vec<Category>,
    /// Product shown in the preview modal.
    pub preview: Option<Product>,
}
