//! # Scripted transport for tests
//!
//! [`MockProductSource`] answers listing requests from a queue of expectations, in call
//! order, each with its own latency. Use it to reproduce races that are hard to trigger
//! against a real backend (slow first response, fast second response, failures).
//!
//! ```rust
//! use catalog_query::transport::mock::MockProductSource;
//! use catalog_query::model::ProductPage;
//! use std::time::Duration;
//!
//! let mock = MockProductSource::new();
//! mock.expect_fetch().after(Duration::from_millis(300)).return_ok(ProductPage::default());
//! mock.expect_fetch().return_err_message("Service down");
//! ```
//!
//! Unexpected calls answer with an error instead of panicking inside the spawned fetch
//! task; [`MockProductSource::verify`] reports them.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{CategorySource, ProductSource};
use crate::fetch::TransportError;
use crate::model::{Category, ListingQuery, ProductPage};

struct Expectation {
    latency: Duration,
    response: Result<ProductPage, TransportError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<ListingQuery>,
    unexpected: usize,
    categories: Vec<Category>,
}

/// Shared handle; clones observe the same expectations and call log.
#[derive(Clone, Default)]
pub struct MockProductSource {
    state: Arc<Mutex<MockState>>,
}

impl MockProductSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories returned by [`CategorySource::fetch_categories`].
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.state.lock().expect("mock state poisoned").categories = categories;
        self
    }

    /// Expects one more `fetch_products` call.
    pub fn expect_fetch(&self) -> FetchExpectationBuilder {
        FetchExpectationBuilder {
            state: self.state.clone(),
            latency: Duration::ZERO,
        }
    }

    /// Queries received so far, in call order.
    pub fn calls(&self) -> Vec<ListingQuery> {
        self.state.lock().expect("mock state poisoned").calls.clone()
    }

    /// Panics unless every expectation was consumed and no unexpected call happened.
    pub fn verify(&self) {
        let state = self.state.lock().expect("mock state poisoned");
        if !state.expectations.is_empty() {
            panic!("Not all expectations were met. {} remaining", state.expectations.len());
        }
        if state.unexpected > 0 {
            panic!("{} unexpected fetch calls", state.unexpected);
        }
    }
}

/// Builder for one listing response.
pub struct FetchExpectationBuilder {
    state: Arc<Mutex<MockState>>,
    latency: Duration,
}

impl FetchExpectationBuilder {
    /// Delays the response by `latency`.
    pub fn after(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, page: ProductPage) {
        self.push(Ok(page));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    /// Shorthand for a [`TransportError::Server`] carrying `message`.
    pub fn return_err_message(self, message: &str) {
        self.push(Err(TransportError::Server(message.to_string())));
    }

    fn push(self, response: Result<ProductPage, TransportError>) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.expectations.push_back(Expectation {
            latency: self.latency,
            response,
        });
    }
}

#[async_trait]
impl ProductSource for MockProductSource {
    async fn fetch_products(&self, query: &ListingQuery) -> Result<ProductPage, TransportError> {
        let expectation = {
            let mut state = self.state.lock().expect("mock state poisoned");
            state.calls.push(query.clone());
            let next = state.expectations.pop_front();
            if next.is_none() {
                state.unexpected += 1;
            }
            next
        };

        match expectation {
            Some(Expectation { latency, response }) => {
                if !latency.is_zero() {
                    tokio::time::sleep(latency).await;
                }
                response
            }
            None => Err(TransportError::Server(format!(
                "unexpected fetch: {}",
                query.to_query_string()
            ))),
        }
    }
}

#[async_trait]
impl CategorySource for MockProductSource {
    async fn fetch_categories(&self) -> Result<Vec<Category>, TransportError> {
        Ok(self.state.lock().expect("mock state poisoned").categories.clone())
    }
}
