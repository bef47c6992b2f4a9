//! The canonical shape of "what is currently being requested".
//!
//! [`FilterCriteria`] is an immutable value type with structural equality. It is created
//! at mount from the address bar (see [`FilterCriteria::parse`](crate::query_store)) and only
//! ever replaced through the [`QueryStore`](crate::query_store::QueryStore).

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::query_store::CriteriaParseError;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Category filter applied to the listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Builds a filter from a category name as picked in the dropdown or read from the URL.
    ///
    /// Blank names and the literal `all` both mean [`CategoryFilter::All`].
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.trim().is_empty() || name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(name)
        }
    }

    /// The value to send as a query parameter, `None` when unfiltered.
    pub fn as_param(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Price sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CriteriaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CriteriaParseError::InvalidSortOrder(other.to_string())),
        }
    }
}

/// The committed filter state.
///
/// # Invariants
/// - `page` is 1-based and never zero.
/// - `keyword` is trimmed; the empty string means "no keyword filter".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub sort_order: SortOrder,
    pub keyword: String,
    pub page: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            sort_order: SortOrder::Asc,
            keyword: String::new(),
            page: 1,
        }
    }
}

impl FilterCriteria {
    /// Creates criteria, normalising the keyword and clamping the page to 1.
    pub fn new(
        category: CategoryFilter,
        sort_order: SortOrder,
        keyword: impl Into<String>,
        page: u32,
    ) -> Self {
        Self {
            category,
            sort_order,
            keyword: keyword.into().trim().to_string(),
            page: page.max(1),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// True when `other` selects the same result set, ignoring pagination.
    pub fn same_filters(&self, other: &Self) -> bool {
        self.category == other.category
            && self.sort_order == other.sort_order
            && self.keyword == other.keyword
    }
}
