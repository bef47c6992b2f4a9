//! Projects committed criteria onto the address bar.
//!
//! Writes are queued while an update pass runs and applied by [`NavigationWriter::flush`],
//! which the view actor calls only after the pass has finished. Intent handlers therefore
//! never navigate synchronously.

pub mod address_bar;

pub use address_bar::*;

use crate::model::FilterCriteria;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingWrite {
    Query(String),
    Empty,
}

/// Deferred, idempotent URL writer.
#[derive(Debug, Default)]
pub struct NavigationWriter {
    pending: Option<PendingWrite>,
}

impl NavigationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `criteria` for the next flush. A later write in the same pass replaces it.
    pub fn write(&mut self, criteria: &FilterCriteria) {
        self.pending = Some(PendingWrite::Query(criteria.serialize()));
    }

    /// Queues a navigation to the bare path (Clear).
    pub fn write_empty(&mut self) {
        self.pending = Some(PendingWrite::Empty);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies the queued write. Returns the new location, or `None` when nothing was
    /// queued or the address bar already shows the target query.
    pub fn flush(&mut self, address_bar: &dyn AddressBar) -> Option<String> {
        let target = match self.pending.take()? {
            PendingWrite::Query(query) => query,
            PendingWrite::Empty => String::new(),
        };
        if address_bar.query() == target {
            debug!(query = %target, "URL already up to date");
            return None;
        }

        let pathname = address_bar.pathname();
        let location = if target.is_empty() {
            pathname
        } else {
            format!("{pathname}?{target}")
        };
        info!(%location, "Navigating");
        address_bar.navigate(&location);
        Some(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryFilter, SortOrder};

    #[test]
    fn test_write_is_deferred_until_flush() {
        let bar = MemoryAddressBar::new("/products");
        let mut writer = NavigationWriter::new();

        writer.write(&FilterCriteria::new(CategoryFilter::named("Books"), SortOrder::Asc, "", 1));
        assert_eq!(bar.navigations(), 0);
        assert!(writer.has_pending());

        let location = writer.flush(&bar);
        assert_eq!(location.as_deref(), Some("/products?category=Books&sortby=asc"));
        assert_eq!(bar.location(), "/products?category=Books&sortby=asc");
        assert!(!writer.has_pending());
    }

    #[test]
    fn test_flush_is_idempotent() {
        let bar = MemoryAddressBar::new("/products?category=Books&sortby=asc");
        let mut writer = NavigationWriter::new();
        writer.write(&FilterCriteria::parse(&bar.query()));
        assert_eq!(writer.flush(&bar), None);
        assert_eq!(writer.flush(&bar), None);
        assert_eq!(bar.navigations(), 0);
    }

    #[test]
    fn test_last_write_in_a_pass_wins() {
        let bar = MemoryAddressBar::new("/products");
        let mut writer = NavigationWriter::new();
        writer.write(&FilterCriteria::parse("category=Toys"));
        writer.write(&FilterCriteria::parse("category=Books"));
        writer.flush(&bar);
        assert_eq!(bar.navigations(), 1);
        assert_eq!(bar.query(), "category=Books&sortby=asc");
    }

    #[test]
    fn test_write_empty_yields_bare_path() {
        let bar = MemoryAddressBar::new("/products?category=Books&sortby=desc&page=2");
        let mut writer = NavigationWriter::new();
        writer.write_empty();
        assert_eq!(writer.flush(&bar).as_deref(), Some("/products"));

        writer.write_empty();
        assert_eq!(writer.flush(&bar), None);
    }

    #[test]
    fn test_writing_defaults_differs_from_clear() {
        let bar = MemoryAddressBar::new("/products?keyword=x");
        let mut writer = NavigationWriter::new();
        writer.write(&FilterCriteria::default());
        assert_eq!(writer.flush(&bar).as_deref(), Some("/products?sortby=asc"));
    }
}
