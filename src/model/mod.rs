//! Pure data structures shared by the query store, the fetch orchestrator and the presentation layer.

pub mod criteria;
pub mod listing;
pub mod product;
pub mod snapshot;

pub use criteria::*;
pub use listing::*;
pub use product::*;
pub use snapshot::*;
