//! Delayed busy indicator.
//!
//! The guard shows nothing for requests that settle within `delay`. If a request is still
//! pending when the delay elapses the indicator becomes visible and stays visible until the
//! request settles. A request superseded while pending keeps the original timer running.

use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug)]
pub struct LoadingGuard {
    delay: Duration,
    armed_until: Option<Instant>,
    visible: bool,
}

impl LoadingGuard {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed_until: None,
            visible: false,
        }
    }

    /// Called on every transition into the pending state.
    pub fn on_pending(&mut self) {
        if self.visible || self.armed_until.is_some() {
            return;
        }
        self.armed_until = Some(Instant::now() + self.delay);
    }

    /// Called when the pending request resolves or fails.
    pub fn on_settled(&mut self) {
        self.armed_until = None;
        if self.visible {
            self.visible = false;
            debug!("Busy indicator hidden");
        }
    }

    /// Timer expiry. Returns true when the indicator just became visible.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.armed_until {
            Some(deadline) if deadline <= now => {
                self.armed_until = None;
                self.visible = true;
                debug!("Busy indicator shown");
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed_until
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Drops the timer and hides the indicator (unmount).
    pub fn cancel(&mut self) {
        self.armed_until = None;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    const DELAY: Duration = Duration::from_millis(150);

    #[tokio::test(start_paused = true)]
    async fn test_fast_request_never_shows() {
        let mut guard = LoadingGuard::new(DELAY);
        guard.on_pending();
        advance(Duration::from_millis(50)).await;
        guard.on_settled();
        assert!(guard.deadline().is_none());
        advance(Duration::from_millis(500)).await;
        assert!(!guard.fire(Instant::now()));
        assert!(!guard.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_shows_until_settled() {
        let mut guard = LoadingGuard::new(DELAY);
        guard.on_pending();
        advance(Duration::from_millis(100)).await;
        assert!(!guard.fire(Instant::now()));

        advance(Duration::from_millis(50)).await;
        assert!(guard.fire(Instant::now()));
        assert!(guard.is_visible());

        advance(Duration::from_millis(250)).await;
        assert!(guard.is_visible());
        guard.on_settled();
        assert!(!guard.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseding_request_keeps_original_timer() {
        let mut guard = LoadingGuard::new(DELAY);
        guard.on_pending();
        let first_deadline = guard.deadline();
        advance(Duration::from_millis(100)).await;
        guard.on_pending();
        assert_eq!(guard.deadline(), first_deadline);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_hides_indicator() {
        let mut guard = LoadingGuard::new(DELAY);
        guard.on_pending();
        advance(DELAY).await;
        assert!(guard.fire(Instant::now()));
        guard.cancel();
        assert!(!guard.is_visible());
        assert!(guard.deadline().is_none());
    }
}
