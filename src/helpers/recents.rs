//! Recents - Session-Scoped Recent Search Queries
//!
//! A bounded, most-recent-first list of submitted queries. Re-submitting an
//! existing query moves it to the front instead of duplicating it. The list
//! lives in memory only; it does not survive a restart.

use crate::constants::RECENT_QUERY_CAP;

/// Recent search queries, newest first, deduplicated by exact match.
#[derive(Clone, Debug)]
pub struct RecentQueries {
    cap: usize,
    entries: Vec<String>,
}

impl RecentQueries {
    /// Create a list bounded to `cap` entries.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            entries: Vec::with_capacity(cap),
        }
    }

    /// Record a submitted query.
    ///
    /// Blank input is ignored. An existing equal entry is moved to the
    /// front; the oldest entry is dropped once the cap is reached.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.cap == 0 {
            return;
        }
        self.entries.retain(|e| e != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.cap);
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all recent queries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for RecentQueries {
    fn default() -> Self {
        Self::new(RECENT_QUERY_CAP)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn newest_first_and_bounded() {
        let mut recents = RecentQueries::default();
        for q in ["x", "y", "x", "z", "w"] {
            recents.record(q);
        }
        assert_eq!(recents.entries(), ["w", "z", "x", "y"]);
        assert_eq!(recents.len(), 4);
    }

    #[test]
    fn resubmitting_moves_to_front_without_growing() {
        let mut recents = RecentQueries::default();
        recents.record("a");
        recents.record("b");
        recents.record("a");
        assert_eq!(recents.entries(), ["a", "b"]);
    }

    #[test]
    fn oldest_is_dropped_at_cap() {
        let mut recents = RecentQueries::new(2);
        recents.record("one");
        recents.record("two");
        recents.record("three");
        assert_eq!(recents.entries(), ["three", "two"]);
    }

    #[test]
    fn blank_queries_are_ignored() {
        let mut recents = RecentQueries::default();
        recents.record("");
        recents.record("   ");
        assert!(recents.is_empty());
    }

    #[test]
    fn clear_empties_the_list() {
        let mut recents = RecentQueries::default();
        recents.record("budget report");
        recents.clear();
        assert!(recents.is_empty());
    }
}
