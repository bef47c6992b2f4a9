//! # Catalog Query
//!
//! > **URL-synchronized filtering, sorting, search and pagination for a product listing.**
//!
//! This crate is the query engine behind a catalog page. It keeps the user's filter
//! choices, the address bar and the product data set consistent while the user types,
//! clicks and navigates, and while backend responses arrive in any order.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### The URL is the source of truth
//! Committed criteria always round-trip through the query string, so a shared or reloaded
//! link reproduces the same listing. Only committed changes reach the URL; the text being
//! typed in the search box stays a draft until typing pauses.
//!
//! ### One owner, no locks
//! All query state belongs to one [`CatalogView`](catalog_actor::CatalogView) value driven by
//! a generic single-task actor. Intents, fetch completions and timer deadlines are applied
//! one at a time, in the order they are processed.
//!
//! ## 🚀 Core Concepts
//!
//! ### Latest request wins
//! Every fetch gets a monotonically increasing [`RequestId`](model::RequestId). Results are
//! matched against the latest issued id, never against arrival order, so a slow response
//! for old criteria can not overwrite a newer one.
//!
//! ### Deferred navigation
//! Handlers only *queue* URL writes. The actor applies them after the update pass, and a
//! write that would not change the URL is skipped.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each concern has its own `thiserror` enum. Parse errors in the URL are recovered
//! locally, transport errors become part of the published state, and only mailbox
//! failures reach callers as [`CatalogError`](catalog_actor::CatalogError).
//!
//! ### 2. Async Context Injection
//! The address bar and transport collaborators are injected when the actor starts
//! (`run(context)`), not when the view is constructed.
//!
//! ### 3. Observability
//! We use `tracing` everywhere with structured logging.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ViewActor<T>` loop: mailbox, background events, deadlines, deferred
//! effects, snapshot publication.
//!
//! ### 2. The Building Blocks
//! - [`model`]: criteria, products, requests and the published snapshot.
//! - [`query_store`]: URL codec and the committed-criteria store.
//! - [`debounce`], [`loading`]: the keyword debounce and the delayed busy indicator.
//! - [`navigation`]: the address-bar abstraction and the deferred writer.
//! - [`fetch`]: request ids and stale-result suppression.
//! - [`transport`]: backend traits, an in-memory catalog and a scripted mock.
//!
//! ### 3. The View ([`catalog_actor`])
//! The `ViewEntity` implementation tying the building blocks together.
//!
//! ### 4. The Interface ([`clients`]) and the Orchestrator ([`lifecycle`])
//! [`CatalogClient`](clients::CatalogClient) exposes one method per user intent;
//! [`CatalogSystem`](lifecycle::CatalogSystem) mounts and unmounts the view.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the scripted demo session
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod debounce;
pub mod fetch;
pub mod framework;
pub mod lifecycle;
pub mod loading;
pub mod model;
pub mod navigation;
pub mod query_store;
pub mod transport;
