use crate::catalog_actor::{CatalogContext, CatalogError};
use crate::clients::{ActorClient, CatalogClient};
use crate::lifecycle::CatalogConfig;
use tracing::{error, info};

/// Runtime orchestrator for one mounted catalog view.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Spawning the view actor and stopping it again
/// - **Dependency Wiring**: Injecting the address bar and transport collaborators
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::mount(&CatalogConfig::default(), context);
/// system.catalog_client.toggle_sort().await?;
/// system.unmount().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the catalog view actor
    pub catalog_client: CatalogClient,

    /// Task handle of the running actor (used for unmounting)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Creates the catalog view actor and starts it with `context` injected.
    ///
    /// The view reads the address bar and dispatches its first fetch as soon as the task
    /// runs; callers do not need to send anything to get an initial listing.
    pub fn mount(config: &CatalogConfig, context: CatalogContext) -> Self {
        let (catalog_actor, catalog_client) = crate::catalog_actor::new(config);
        let handle = tokio::spawn(catalog_actor.run(context));

        Self {
            catalog_client,
            handle,
        }
    }

    /// Unmounts the view and waits for the actor task to finish.
    ///
    /// Pending debounce and busy-indicator timers are cancelled. Fetches still in flight
    /// complete in the background but their results are discarded.
    pub async fn unmount(self) -> Result<(), CatalogError> {
        info!("Unmounting catalog view...");

        self.catalog_client.unmount().await?;
        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(CatalogError::ActorCommunicationError(format!(
                "Actor task failed: {:?}",
                e
            )));
        }

        info!("Unmount complete.");
        Ok(())
    }
}
