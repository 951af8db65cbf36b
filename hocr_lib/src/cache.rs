//! Per-year memo of results-listing pages, backed by `DashMap`.

use dashmap::DashMap;

/// Results-listing HTML keyed by regatta year.
///
/// Lives for the process only; nothing expires or persists. A disabled
/// cache never stores anything, so every lookup misses and the page is
/// re-fetched. Outputs are the same either way.
pub struct PageCache {
    store: DashMap<i32, String>,
    enabled: bool,
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCache {
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
            enabled: true,
        }
    }

    /// A cache that stores nothing.
    pub fn disabled() -> Self {
        Self {
            store: DashMap::new(),
            enabled: false,
        }
    }

    /// Returns the cached page for `year`, or `None` on a miss.
    pub fn get(&self, year: i32) -> Option<String> {
        self.store.get(&year).map(|entry| entry.value().clone())
    }

    /// Stores the page for `year`, overwriting any earlier entry.
    pub fn set(&self, year: i32, page: String) {
        if self.enabled {
            self.store.insert(year, page);
        }
    }

    /// Builder-style pre-population, for seeding pages in tests.
    pub fn with_page(self, year: i32, page: impl Into<String>) -> Self {
        self.set(year, page.into());
        self
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
