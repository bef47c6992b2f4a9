//! Single source of truth for the committed [`FilterCriteria`].
//!
//! The store never touches the URL. Callers hand the value returned by
//! [`QueryStore::commit`] to the [`NavigationWriter`](crate::navigation::NavigationWriter)
//! and the [`FetchOrchestrator`](crate::fetch::FetchOrchestrator).

pub mod codec;
pub mod error;

pub use codec::*;
pub use error::*;

use crate::model::{CategoryFilter, FilterCriteria, SortOrder};
use tracing::{debug, info};

/// Partial update of [`FilterCriteria`]; `None` leaves a field untouched.
///
/// An empty `keyword` deletes the keyword filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaPatch {
    pub category: Option<CategoryFilter>,
    pub sort_order: Option<SortOrder>,
    pub keyword: Option<String>,
    pub page: Option<u32>,
}

impl CriteriaPatch {
    pub fn category(category: CategoryFilter) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn sort_order(sort_order: SortOrder) -> Self {
        Self {
            sort_order: Some(sort_order),
            ..Self::default()
        }
    }

    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

/// Holds the committed criteria and applies the page-reset rule.
#[derive(Debug, Clone)]
pub struct QueryStore {
    current: FilterCriteria,
    reset_page_on_sort: bool,
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new(FilterCriteria::default())
    }
}

impl QueryStore {
    pub fn new(initial: FilterCriteria) -> Self {
        Self {
            current: initial,
            reset_page_on_sort: true,
        }
    }

    /// Controls whether a sort-order change sends the user back to page 1.
    pub fn with_sort_reset(mut self, enabled: bool) -> Self {
        self.reset_page_on_sort = enabled;
        self
    }

    pub fn current(&self) -> &FilterCriteria {
        &self.current
    }

    /// Merges `patch` into the current criteria and returns the new value.
    ///
    /// `page` resets to 1 whenever `category` or `keyword` change, and when `sort_order`
    /// changes unless sort resets are disabled. A reset overrides any page in the patch.
    pub fn commit(&mut self, patch: CriteriaPatch) -> FilterCriteria {
        let previous = &self.current;
        let mut next = previous.clone();

        if let Some(category) = patch.category {
            next.category = match category {
                CategoryFilter::Named(name) => CategoryFilter::named(name),
                all => all,
            };
        }
        if let Some(sort_order) = patch.sort_order {
            next.sort_order = sort_order;
        }
        if let Some(keyword) = patch.keyword {
            next.keyword = keyword.trim().to_string();
        }
        if let Some(page) = patch.page {
            next.page = page.max(1);
        }

        let baseline = if self.reset_page_on_sort {
            previous.clone()
        } else {
            FilterCriteria {
                sort_order: next.sort_order,
                ..previous.clone()
            }
        };
        if !next.same_filters(&baseline) {
            next.page = 1;
        }

        if next == *previous {
            debug!(criteria = ?next, "Commit left criteria unchanged");
        } else {
            info!(
                category = %next.category,
                sort = %next.sort_order,
                keyword = %next.keyword,
                page = next.page,
                "Committed"
            );
            self.current = next.clone();
        }
        next
    }

    /// Adopts criteria read from an external location change. Returns whether anything changed.
    pub fn replace(&mut self, criteria: FilterCriteria) -> bool {
        if self.current == criteria {
            return false;
        }
        info!(criteria = ?criteria, "Replaced from location");
        self.current = criteria;
        true
    }

    /// Restores the default criteria.
    pub fn reset(&mut self) -> FilterCriteria {
        self.replace(FilterCriteria::default());
        self.current.clone()
    }
}
