//! # View Lifecycle & Orchestration
//!
//! This module owns everything around the catalog view that is not query logic: loading
//! configuration, wiring the injected collaborators, mounting and unmounting the view
//! actor, and installing the tracing subscriber.
//!
//! # Main Components
//!
//! - [`CatalogSystem`] - Mounts the catalog view with its collaborators and unmounts it
//! - [`CatalogConfig`] - Timings and policy flags, loaded from TOML
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//!
//! ```rust,ignore
//! let config = CatalogConfig::load("catalog.toml")?;
//! let context = CatalogContext::with_backend(address_bar, backend);
//! let system = CatalogSystem::mount(&config, context);
//!
//! system.catalog_client.pick_category("Books").await?;
//! let snapshot = system.catalog_client.snapshot().await?;
//!
//! system.unmount().await?;
//! ```

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::*;
pub use config::*;
pub use self::tracing::setup_tracing;
