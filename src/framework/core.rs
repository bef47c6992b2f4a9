//! # Core View Actor Framework
//!
//! This module defines the generic building blocks for single-owner view state.
//!
//! ## Key Types
//!
//! - [`ViewEntity`]: The trait that a view's state must implement.
//! - [`ViewActor`]: The generic actor that owns the state and runs its event loop.
//! - [`ViewClient`]: The generic client for sending intents and reading snapshots.
//! - [`Scope`]: Handle passed to every hook for spawning background work.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed).

use std::fmt::Debug;
use std::future::Future;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any view state must implement to be driven by [`ViewActor`].
///
/// # Architecture Note
/// The actor loop is written once and works for any view. A view reacts to three kinds of
/// input, always one at a time:
/// - **Intents** sent by the presentation layer through a [`ViewClient`].
/// - **Events** produced by background work it spawned through [`Scope::spawn`].
/// - **Deadlines** it reported through [`ViewEntity::next_deadline`].
///
/// Each of these is an *update pass*. Side effects that must not happen during an update
/// (navigation, for instance) are queued by the handlers and applied in
/// [`ViewEntity::flush_effects`], which the loop calls after every pass. The loop then
/// publishes [`ViewEntity::snapshot`] to subscribers.
///
/// # Context
/// Collaborators are injected when the loop starts (`run(context)`), not at construction.
pub trait ViewEntity: Sized + Send + 'static {
    /// Messages from the presentation layer.
    type Intent: Send + Debug;

    /// Reply to an intent.
    type Output: Send + Debug;

    /// Completions of background work.
    type Event: Send + 'static;

    /// Immutable render state.
    type Snapshot: Clone + PartialEq + Send + Sync + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    // --- Lifecycle Hooks ---

    /// Called once before the first message is processed.
    fn on_mount(&mut self, _scope: &Scope<'_, Self>) {}

    /// Called once after the loop stops. Pending timers should be dropped here.
    fn on_unmount(&mut self) {}

    // --- Update Handlers ---

    fn handle_intent(&mut self, intent: Self::Intent, scope: &Scope<'_, Self>) -> Self::Output;

    fn handle_event(&mut self, event: Self::Event, scope: &Scope<'_, Self>);

    /// Earliest instant at which [`ViewEntity::on_deadline`] should run.
    fn next_deadline(&self) -> Option<Instant> {
        None
    }

    fn on_deadline(&mut self, _now: Instant, _scope: &Scope<'_, Self>) {}

    // --- Effects & Rendering ---

    /// Applies effects queued during the update pass that just finished.
    fn flush_effects(&mut self, _ctx: &Self::Context) {}

    fn snapshot(&self) -> Self::Snapshot;
}

/// Borrowed access to the context and the event channel during an update pass.
pub struct Scope<'a, T: ViewEntity> {
    context: &'a T::Context,
    events: &'a mpsc::UnboundedSender<T::Event>,
}

impl<'a, T: ViewEntity> Scope<'a, T> {
    pub fn new(context: &'a T::Context, events: &'a mpsc::UnboundedSender<T::Event>) -> Self {
        Self { context, events }
    }

    pub fn context(&self) -> &'a T::Context {
        self.context
    }

    /// Runs `task` in the background and feeds its output back as an event.
    ///
    /// If the view has unmounted by the time the task finishes, the event is dropped.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = T::Event> + Send + 'static,
    {
        let events = self.events.clone();
        tokio::spawn(async move {
            let event = task.await;
            if events.send(event).is_err() {
                debug!("View unmounted, dropping event");
            }
        });
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
pub enum ViewRequest<T: ViewEntity> {
    Intent {
        intent: T::Intent,
        respond_to: Response<T::Output>,
    },
    Snapshot {
        respond_to: Response<T::Snapshot>,
    },
    Unmount {
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a view's state.
///
/// **Concurrency Model**:
/// The actor processes intents, events and deadlines *sequentially* in one task, so the
/// state needs no `Mutex`. Background work (network calls) runs in separate tasks and
/// only touches the state through events.
pub struct ViewActor<T: ViewEntity> {
    receiver: mpsc::Receiver<ViewRequest<T>>,
    entity: T,
    snapshots: watch::Sender<T::Snapshot>,
}

impl<T: ViewEntity> ViewActor<T> {
    pub fn new(entity: T, buffer_size: usize) -> (Self, ViewClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (snapshots, watcher) = watch::channel(entity.snapshot());
        let actor = Self {
            receiver,
            entity,
            snapshots,
        };
        (actor, ViewClient::new(sender, watcher))
    }

    /// Runs the actor's event loop until it is unmounted or every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "CatalogView" instead of the full path)
        let view_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let (events_tx, mut events_rx) = mpsc::unbounded_channel::<T::Event>();

        self.entity.on_mount(&Scope::new(&context, &events_tx));
        self.end_pass(&context);
        info!(view_type, "View mounted");

        let mut unmount_reply = None;
        loop {
            let deadline = self.entity.next_deadline();
            let scope = Scope::new(&context, &events_tx);

            tokio::select! {
                biased;

                msg = self.receiver.recv() => match msg {
                    Some(ViewRequest::Intent { intent, respond_to }) => {
                        debug!(view_type, ?intent, "Intent");
                        let output = self.entity.handle_intent(intent, &scope);
                        self.end_pass(&context);
                        let _ = respond_to.send(Ok(output));
                    }
                    Some(ViewRequest::Snapshot { respond_to }) => {
                        let _ = respond_to.send(Ok(self.entity.snapshot()));
                    }
                    Some(ViewRequest::Unmount { respond_to }) => {
                        unmount_reply = Some(respond_to);
                        break;
                    }
                    None => break,
                },
                Some(event) = events_rx.recv() => {
                    self.entity.handle_event(event, &scope);
                    self.end_pass(&context);
                }
                _ = wait_for(deadline) => {
                    self.entity.on_deadline(Instant::now(), &scope);
                    self.end_pass(&context);
                }
            }
        }

        self.entity.on_unmount();
        info!(view_type, "View unmounted");
        if let Some(respond_to) = unmount_reply {
            let _ = respond_to.send(Ok(()));
        }
    }

    /// Deferred-effect phase followed by snapshot publication.
    fn end_pass(&mut self, context: &T::Context) {
        self.entity.flush_effects(context);
        let next = self.entity.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`ViewActor`].
pub struct ViewClient<T: ViewEntity> {
    sender: mpsc::Sender<ViewRequest<T>>,
    snapshots: watch::Receiver<T::Snapshot>,
}

impl<T: ViewEntity> Clone for ViewClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<T: ViewEntity> ViewClient<T> {
    pub fn new(
        sender: mpsc::Sender<ViewRequest<T>>,
        snapshots: watch::Receiver<T::Snapshot>,
    ) -> Self {
        Self { sender, snapshots }
    }

    pub async fn dispatch(&self, intent: T::Intent) -> Result<T::Output, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ViewRequest::Intent { intent, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Round-trips through the actor, so the snapshot reflects every earlier intent.
    pub async fn snapshot(&self) -> Result<T::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ViewRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// The most recently published snapshot, without contacting the actor.
    pub fn latest(&self) -> T::Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified after every update pass that changed the snapshot.
    pub fn subscribe(&self) -> watch::Receiver<T::Snapshot> {
        self.snapshots.clone()
    }

    pub async fn unmount(&self) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ViewRequest::Unmount { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // --- View Definition ---

    /// Counter whose increments are confirmed by a background task and whose
    /// "flash" message disappears after a deadline.
    #[derive(Default)]
    struct Counter {
        value: u32,
        confirmed: u32,
        flash_until: Option<Instant>,
        flushes: u32,
    }

    #[derive(Debug)]
    enum CounterIntent {
        Increment,
        Flash,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct CounterSnapshot {
        value: u32,
        confirmed: u32,
        flashing: bool,
        flushes: u32,
    }

    impl ViewEntity for Counter {
        type Intent = CounterIntent;
        type Output = u32;
        type Event = u32;
        type Snapshot = CounterSnapshot;
        type Context = Duration;

        fn handle_intent(&mut self, intent: CounterIntent, scope: &Scope<'_, Self>) -> u32 {
            match intent {
                CounterIntent::Increment => {
                    self.value += 1;
                    let value = self.value;
                    let delay = *scope.context();
                    scope.spawn(async move {
                        tokio::time::sleep(delay).await;
                        value
                    });
                }
                CounterIntent::Flash => {
                    self.flash_until = Some(Instant::now() + Duration::from_millis(100));
                }
            }
            self.value
        }

        fn handle_event(&mut self, event: u32, _scope: &Scope<'_, Self>) {
            self.confirmed = self.confirmed.max(event);
        }

        fn next_deadline(&self) -> Option<Instant> {
            self.flash_until
        }

        fn on_deadline(&mut self, now: Instant, _scope: &Scope<'_, Self>) {
            if self.flash_until.is_some_and(|d| d <= now) {
                self.flash_until = None;
            }
        }

        fn flush_effects(&mut self, _ctx: &Duration) {
            self.flushes += 1;
        }

        fn snapshot(&self) -> CounterSnapshot {
            CounterSnapshot {
                value: self.value,
                confirmed: self.confirmed,
                flashing: self.flash_until.is_some(),
                flushes: self.flushes,
            }
        }
    }

    // --- Test ---

    #[tokio::test(start_paused = true)]
    async fn test_view_actor_intents_events_and_deadlines() {
        let (actor, client) = ViewActor::new(Counter::default(), 10);
        let handle = tokio::spawn(actor.run(Duration::from_millis(50)));

        // 1. Intents reply after the pass, in order
        assert_eq!(client.dispatch(CounterIntent::Increment).await.unwrap(), 1);
        assert_eq!(client.dispatch(CounterIntent::Increment).await.unwrap(), 2);
        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot.confirmed, 0);
        // mount + two intents
        assert_eq!(snapshot.flushes, 3);

        // 2. Events arrive from background work
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(client.snapshot().await.unwrap().confirmed, 2);

        // 3. Deadlines fire without any message
        client.dispatch(CounterIntent::Flash).await.unwrap();
        assert!(client.latest().flashing);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!client.latest().flashing);

        // 4. Unmount stops the loop
        client.unmount().await.unwrap();
        handle.await.unwrap();
        assert_eq!(
            client.dispatch(CounterIntent::Increment).await,
            Err(FrameworkError::ActorClosed)
        );
    }

    #[tokio::test]
    async fn test_dropping_clients_stops_actor() {
        let (actor, client) = ViewActor::new(Counter::default(), 10);
        let handle = tokio::spawn(actor.run(Duration::ZERO));
        client.dispatch(CounterIntent::Increment).await.unwrap();
        drop(client);
        handle.await.unwrap();
    }
}
