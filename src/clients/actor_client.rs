use crate::framework::{FrameworkError, ViewClient, ViewEntity};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for view-specific clients to inherit the operations every view supports.
///
/// Implementors only provide access to the generic [`ViewClient`] and an error mapping;
/// snapshot reads and unmounting come for free.
#[async_trait]
pub trait ActorClient<T: ViewEntity>: Send + Sync {
    /// The view-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ViewClient.
    fn inner(&self) -> &ViewClient<T>;

    /// Map framework errors to the specific view error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Current state, after every intent sent before this call has been applied.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Receiver for snapshots published after each update pass.
    fn subscribe(&self) -> watch::Receiver<T::Snapshot> {
        self.inner().subscribe()
    }

    /// Stops the view. Pending timers are cancelled; late fetch results are dropped.
    #[tracing::instrument(skip(self))]
    async fn unmount(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().unmount().await.map_err(Self::map_error)
    }
}
