//! The router abstraction the navigation writer projects criteria onto.

use std::sync::{Arc, Mutex, PoisonError};

/// Read/write access to the browser location.
///
/// Implementations only ever receive complete locations; the live query is never
/// mutated in place.
pub trait AddressBar: Send + Sync {
    /// Path without query string, e.g. `/products`.
    fn pathname(&self) -> String;

    /// Current query string without the leading `?`; empty when there is none.
    fn query(&self) -> String;

    /// Pushes a new history entry. `location` is a path, optionally followed by `?query`.
    fn navigate(&self, location: &str);
}

/// Splits `/path?query` into its two halves.
pub fn split_location(location: &str) -> (&str, &str) {
    location.split_once('?').unwrap_or((location, ""))
}

/// In-memory history stack, used by the demo and by tests to observe navigations.
#[derive(Debug, Clone)]
pub struct MemoryAddressBar {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemoryAddressBar {
    /// Starts a history whose only entry is `location`.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(vec![location.into()])),
        }
    }

    /// The current location, `/path` or `/path?query`.
    pub fn location(&self) -> String {
        self.lock().last().cloned().unwrap_or_default()
    }

    /// Every location visited, oldest first, including the initial one.
    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of navigations performed since creation.
    pub fn navigations(&self) -> usize {
        self.lock().len().saturating_sub(1)
    }

    /// Pops the current entry like the browser back button and returns the new location.
    pub fn back(&self) -> Option<String> {
        let mut entries = self.lock();
        if entries.len() < 2 {
            return None;
        }
        entries.pop();
        entries.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryAddressBar {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AddressBar for MemoryAddressBar {
    fn pathname(&self) -> String {
        split_location(&self.location()).0.to_string()
    }

    fn query(&self) -> String {
        split_location(&self.location()).1.to_string()
    }

    fn navigate(&self, location: &str) {
        self.lock().push(location.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_history() {
        let bar = MemoryAddressBar::new("/products?sortby=desc");
        assert_eq!(bar.pathname(), "/products");
        assert_eq!(bar.query(), "sortby=desc");

        bar.navigate("/products");
        assert_eq!(bar.query(), "");
        assert_eq!(bar.navigations(), 1);

        assert_eq!(bar.back().as_deref(), Some("/products?sortby=desc"));
        assert_eq!(bar.back(), None);
        assert_eq!(bar.navigations(), 0);
    }

    #[test]
    fn test_split_location() {
        assert_eq!(split_location("/products?sortby=desc&page=2"), ("/products", "sortby=desc&page=2"));
        assert_eq!(split_location("/products"), ("/products", ""));
        assert_eq!(split_location("/products?"), ("/products", ""));
    }
}
