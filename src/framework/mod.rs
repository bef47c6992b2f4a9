//! Generic actor framework for single-owner view state.
//!
//! This module provides the building blocks for views whose state is owned by one task
//! and changed only through messages, background-work completions and timer deadlines.
//!
//! # Main Components
//!
//! - [`ViewEntity`] - Trait that view state types implement to be driven by an actor
//! - [`ViewActor`] - Generic actor that owns the state and runs the update loop
//! - [`ViewClient`] - Type-safe handle for dispatching intents and reading snapshots
//! - [`Scope`] - Spawns background work whose result comes back as an event
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
