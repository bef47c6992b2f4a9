//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The output uses the compact
//! format without module targets (`with_target(false)`), so lines stay short while keeping
//! their structured fields.
//!
//! ## What Gets Traced
//!
//! - **View lifecycle** (`info`): mount with the initial query, unmount
//! - **Commits and navigation** (`info`): the committed criteria and every URL written
//! - **Fetches** (`info`/`warn`): dispatch with `request_id` and outbound query, resolution
//!   with result counts, transport failures
//! - **Payloads and drops** (`debug`): intents, stale results, recovered parse errors,
//!   skipped no-op navigations
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show intents, stale drops and no-op writes
//! RUST_LOG=debug cargo run
//!
//! # Only the fetch orchestrator
//! RUST_LOG=catalog_query::fetch=debug cargo run
//! ```
//!
//! ## Session Trace Example
//!
//! **With `RUST_LOG=info`**, picking a category and typing a keyword:
//!
//! ```text
//! INFO Mounting catalog view query=""
//! INFO Dispatching fetch request_id=request_1 query=pageNumber=0&sortBy=price&sortOrder=asc
//! INFO View mounted view_type="CatalogView"
//! INFO Fetch resolved request_id=request_1 products=8 total_elements=12
//! INFO Committed category=Books sort=asc keyword= page=1
//! INFO Dispatching fetch request_id=request_2 query=pageNumber=0&sortBy=price&sortOrder=asc&category=Books
//! INFO Navigating location=/products?category=Books&sortby=asc
//! INFO Fetch resolved request_id=request_2 products=3 total_elements=3
//! ```
//!
//! Each step carries structured fields that can be filtered in production logging systems.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
