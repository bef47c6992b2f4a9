//! # Fetch Orchestrator
//!
//! Turns committed criteria into [`FetchRequest`]s and decides which [`FetchResult`] is
//! authoritative.
//!
//! ## State machine
//!
//! ```text
//!   Idle ──dispatch──▶ Pending ──Ok (latest id)──▶ Resolved
//!                        │  ▲
//!                        │  └──── dispatch ◀──── Resolved / Failed
//!                        └──Err (latest id)──▶ Failed
//! ```
//!
//! Every request gets a fresh, strictly increasing [`RequestId`]. The id is the
//! cancellation token: a result is accepted only when its id equals the most recently
//! issued one, so a slow early response can never overwrite a fast later one regardless of
//! arrival order. Dropped results are [`Resolution::Superseded`].
//!
//! Transport errors replace the visible data set with the error message; there is no
//! fallback to earlier data and no retry at this layer.

pub mod error;

pub use error::*;

use crate::model::{FetchPhase, FetchRequest, FetchResult, FilterCriteria, Listing, ListingQuery, RequestId};
use tracing::{debug, info, warn};

/// What happened to a delivered [`FetchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result became the visible data set (or error view).
    Accepted,
    /// A newer request had been issued; the result was dropped.
    Superseded,
}

#[derive(Debug)]
pub struct FetchOrchestrator {
    sort_key: String,
    next_id: u64,
    latest: Option<RequestId>,
    last_dispatched: Option<FilterCriteria>,
    phase: FetchPhase,
    listing: Listing,
}

impl FetchOrchestrator {
    /// `sort_key` is the fixed `sortBy` parameter (e.g. `price`).
    pub fn new(sort_key: impl Into<String>) -> Self {
        Self {
            sort_key: sort_key.into(),
            next_id: 1,
            latest: None,
            last_dispatched: None,
            phase: FetchPhase::Idle,
            listing: Listing::Empty,
        }
    }

    /// Issues a request if `criteria` differ from the last dispatched criteria.
    pub fn dispatch(&mut self, criteria: &FilterCriteria) -> Option<FetchRequest> {
        if self.last_dispatched.as_ref() == Some(criteria) {
            debug!(?criteria, "Criteria already dispatched");
            return None;
        }
        Some(self.issue(criteria))
    }

    /// Issues a request for `criteria` even if they were already dispatched.
    pub fn redispatch(&mut self, criteria: &FilterCriteria) -> FetchRequest {
        self.issue(criteria)
    }

    fn issue(&mut self, criteria: &FilterCriteria) -> FetchRequest {
        let request_id = RequestId(self.next_id);
        self.next_id += 1;

        if let FetchPhase::Pending { request_id: previous } = self.phase {
            debug!(%previous, %request_id, "Superseding in-flight request");
        }
        self.latest = Some(request_id);
        self.last_dispatched = Some(criteria.clone());
        self.phase = FetchPhase::Pending { request_id };

        let query = ListingQuery::from_criteria(criteria, &self.sort_key);
        info!(%request_id, query = %query.to_query_string(), "Dispatching fetch");
        FetchRequest {
            request_id,
            criteria: criteria.clone(),
            query,
        }
    }

    /// Applies a delivered result if it belongs to the latest request.
    pub fn resolve(&mut self, result: FetchResult) -> Resolution {
        let FetchResult { request_id, outcome } = result;
        if self.latest != Some(request_id) {
            debug!(%request_id, latest = ?self.latest, "Dropping stale result");
            return Resolution::Superseded;
        }

        match outcome {
            Ok(page) => {
                info!(
                    %request_id,
                    products = page.products.len(),
                    total_elements = page.pagination.total_elements,
                    "Fetch resolved"
                );
                self.phase = FetchPhase::Resolved { request_id };
                self.listing = Listing::Products(page);
            }
            Err(e) => {
                warn!(%request_id, error = %e, "Fetch failed");
                self.phase = FetchPhase::Failed { request_id };
                self.listing = Listing::Error(e.to_string());
            }
        }
        Resolution::Accepted
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn is_pending(&self) -> bool {
        self.phase.is_pending()
    }
}
