//! Request/response types exchanged between the fetch orchestrator and the listing collaborator.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use url::form_urlencoded;

use super::{FilterCriteria, ProductPage, SortOrder};
use crate::fetch::TransportError;

/// Monotonically increasing id of a fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request_{}", self.0)
    }
}

/// Outbound parameters sent to the product-listing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    /// Zero-based page index.
    pub page_number: u32,
    pub sort_by: String,
    pub sort_order: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl ListingQuery {
    /// Maps committed criteria to request parameters.
    ///
    /// `category` and `keyword` are only included when they differ from the defaults.
    pub fn from_criteria(criteria: &FilterCriteria, sort_by: &str) -> Self {
        Self {
            page_number: criteria.page.saturating_sub(1),
            sort_by: sort_by.to_string(),
            sort_order: criteria.sort_order,
            category: criteria.category.as_param().map(str::to_string),
            keyword: (!criteria.keyword.is_empty()).then(|| criteria.keyword.clone()),
        }
    }

    /// Encodes the query as `pageNumber=..&sortBy=..&sortOrder=..[&category=..][&keyword=..]`.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        out.append_pair("pageNumber", &self.page_number.to_string());
        out.append_pair("sortBy", &self.sort_by);
        out.append_pair("sortOrder", self.sort_order.as_str());
        if let Some(category) = &self.category {
            out.append_pair("category", category);
        }
        if let Some(keyword) = &self.keyword {
            out.append_pair("keyword", keyword);
        }
        out.finish()
    }
}

/// A request issued for one commit of changed criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub request_id: RequestId,
    pub criteria: FilterCriteria,
    pub query: ListingQuery,
}

/// The transport's answer to a [`FetchRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub request_id: RequestId,
    pub outcome: Result<ProductPage, TransportError>,
}

/// Lifecycle of the current query slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Pending { request_id: RequestId },
    Resolved { request_id: RequestId },
    Failed { request_id: RequestId },
}

impl FetchPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

/// What the product grid currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Listing {
    #[default]
    Empty,
    Products(ProductPage),
    Error(String),
}

impl Listing {
    pub fn page(&self) -> Option<&ProductPage> {
        match self {
            Self::Products(page) => Some(page),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
