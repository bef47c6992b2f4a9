//! Type-safe wrappers around [`ViewClient`](crate::framework::ViewClient).

pub mod actor_client;
pub mod catalog_client;

pub use actor_client::*;
pub use catalog_client::*;
