//! Quiet-period debouncing for free-text input.
//!
//! A [`Debouncer`] holds at most one pending value. Scheduling a new value replaces the
//! pending one and restarts the quiet period, so a burst of keystrokes yields a single
//! value once input stops for `delay`. The owner polls [`Debouncer::deadline`] and
//! collects the value with [`Debouncer::take_expired`]; nothing is committed from here.

use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Debounce state for one logical field.
#[derive(Debug)]
pub struct Debouncer<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pending value and restarts the quiet period.
    pub fn schedule(&mut self, value: T, delay: Duration) {
        let replaced = self.pending.is_some();
        self.pending = Some(Pending {
            value,
            deadline: Instant::now() + delay,
        });
        debug!(replaced, delay_ms = delay.as_millis() as u64, "Debounce scheduled");
    }

    /// Discards the pending value without yielding it. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            debug!("Debounce cancelled");
        }
        cancelled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Yields the pending value once its quiet period has elapsed at `now`.
    pub fn take_expired(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.deadline <= now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }
}
