//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then [`expect_intent`] to
//! assert on what the client sent. [`MockView`] answers from a queue of scripted outputs.

use crate::framework::{FrameworkError, Response, ViewClient, ViewEntity, ViewRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

struct MockState<T: ViewEntity> {
    expectations: VecDeque<Result<T::Output, FrameworkError>>,
    received: Vec<T::Intent>,
    unexpected: usize,
}

/// A mock view with expectation tracking for fluent testing.
///
/// Intents are answered in order from the expectation queue. Snapshot requests return the
/// snapshot given to [`MockView::new`]; unmount always succeeds.
///
/// # Example
/// ```ignore
/// let mut mock = MockView::<CatalogView>::new(CatalogSnapshot::default());
/// mock.expect_intent().return_ok(FilterCriteria::default());
///
/// let client = CatalogClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockView<T: ViewEntity> {
    client: ViewClient<T>,
    state: Arc<Mutex<MockState<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ViewEntity> MockView<T> {
    /// Creates a new mock view with no expectations.
    pub fn new(snapshot: T::Snapshot) -> Self {
        let (sender, mut receiver) = mpsc::channel::<ViewRequest<T>>(100);
        let (_publisher, watcher) = watch::channel(snapshot.clone());
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            received: Vec::new(),
            unexpected: 0,
        }));
        let state_clone = state.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                match request {
                    ViewRequest::Intent { intent, respond_to } => {
                        let response = {
                            let mut state = state_clone.lock().expect("mock state poisoned");
                            state.received.push(intent);
                            let next = state.expectations.pop_front();
                            if next.is_none() {
                                state.unexpected += 1;
                            }
                            next
                        };
                        // Dropping the responder surfaces as ActorDropped on the client.
                        if let Some(response) = response {
                            let _ = respond_to.send(response);
                        }
                    }
                    ViewRequest::Snapshot { respond_to } => {
                        let _ = respond_to.send(Ok(snapshot.clone()));
                    }
                    ViewRequest::Unmount { respond_to } => {
                        let _ = respond_to.send(Ok(()));
                    }
                }
            }
        });

        Self {
            client: ViewClient::new(sender, watcher),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ViewClient<T> {
        self.client.clone()
    }

    /// Expects one more intent.
    pub fn expect_intent(&mut self) -> IntentExpectationBuilder<T> {
        IntentExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Intents received so far, in order.
    pub fn received(&self) -> Vec<T::Intent>
    where
        T::Intent: Clone,
    {
        self.state.lock().expect("mock state poisoned").received.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().expect("mock state poisoned");
        if !state.expectations.is_empty() {
            panic!("Not all expectations were met. {} remaining", state.expectations.len());
        }
        if state.unexpected > 0 {
            panic!("{} unexpected intents", state.unexpected);
        }
    }
}

/// Builder for intent expectations.
pub struct IntentExpectationBuilder<T: ViewEntity> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: ViewEntity> IntentExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, output: T::Output) {
        self.push(Ok(output));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Output, FrameworkError>) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.expectations.push_back(response);
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When testing a *client* wrapper (e.g., `CatalogClient`) there is no need to run a full
/// `ViewActor`. The returned client sends its messages to `receiver`, which the test
/// inspects and answers, simulating success, failure or delay deterministically.
///
/// The client's published snapshot is fixed at `snapshot`.
pub fn create_mock_client<T: ViewEntity>(
    buffer_size: usize,
    snapshot: T::Snapshot,
) -> (ViewClient<T>, mpsc::Receiver<ViewRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, watcher) = watch::channel(snapshot);
    (ViewClient::new(sender, watcher), receiver)
}

/// Helper to verify that the next message is an Intent request
pub async fn expect_intent<T: ViewEntity>(
    receiver: &mut mpsc::Receiver<ViewRequest<T>>,
) -> Option<(T::Intent, Response<T::Output>)> {
    match receiver.recv().await {
        Some(ViewRequest::Intent { intent, respond_to }) => Some((intent, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<T: ViewEntity>(
    receiver: &mut mpsc::Receiver<ViewRequest<T>>,
) -> Option<Response<T::Snapshot>> {
    match receiver.recv().await {
        Some(ViewRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
