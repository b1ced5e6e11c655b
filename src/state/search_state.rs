//! SearchState - Global Search Panel State
//!
//! The full lifecycle of the header search: panel open/close, the debounced
//! query, the candidate index, filtered results, and recent queries. The
//! GPUI component owns only the settling timer; every transition lives here
//! so the contract stays unit-testable.
//!
//! Lookups are guarded by a generation token: each (re)started query bumps
//! the generation, and a completion carrying a stale token is discarded, so
//! a slow lookup can never overwrite a newer query's results.

use crate::app::navigation::NavigationTarget;
use crate::helpers::recents::RecentQueries;

/// Which bucket a search hit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchCategory {
    Page,
    Creator,
    Campaign,
    Payment,
}

impl SearchCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SearchCategory::Page => "Pages",
            SearchCategory::Creator => "Creators",
            SearchCategory::Campaign => "Campaigns",
            SearchCategory::Payment => "Payments",
        }
    }
}

/// A single searchable entry and, once filtered, a rendered result
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub category: SearchCategory,
    pub title: String,
    pub subtitle: String,
    pub target: NavigationTarget,
    pub icon: &'static str,
}

/// Lifecycle of the search panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Panel closed
    #[default]
    Idle,
    /// Panel open, query empty - recents shown
    Empty,
    /// Query non-empty, settling timer running
    Pending,
    /// Results computed for the settled query
    Loaded,
}

/// State behind the global search panel
pub struct SearchState {
    query: String,
    phase: SearchPhase,
    candidates: Vec<SearchHit>,
    results: Vec<SearchHit>,
    recents: RecentQueries,
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            phase: SearchPhase::Idle,
            candidates: Vec::new(),
            results: Vec::new(),
            recents: RecentQueries::default(),
            generation: 0,
        }
    }
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != SearchPhase::Idle
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    pub fn recents(&self) -> &RecentQueries {
        &self.recents
    }

    /// Replace the candidate index (rebuilt when page data changes).
    pub fn set_candidates(&mut self, candidates: Vec<SearchHit>) {
        self.candidates = candidates;
    }

    /// Open the panel. Resumes with the query left from the last dismissal.
    pub fn open_panel(&mut self) {
        if self.phase != SearchPhase::Idle {
            return;
        }
        self.phase = if self.query.trim().is_empty() {
            SearchPhase::Empty
        } else {
            SearchPhase::Pending
        };
    }

    /// Close the panel without touching the query or recents
    /// (outside click, Escape).
    pub fn dismiss(&mut self) {
        self.phase = SearchPhase::Idle;
        // Invalidate any lookup still in flight.
        self.generation += 1;
    }

    /// Record a keystroke's worth of query text.
    ///
    /// Returns the generation token the caller must schedule a lookup for,
    /// or `None` when the query became empty and results were cleared
    /// immediately (no timer wait).
    pub fn begin_query(&mut self, query: impl Into<String>) -> Option<u64> {
        self.query = query.into();
        self.generation += 1;
        if self.query.trim().is_empty() {
            self.results.clear();
            self.phase = SearchPhase::Empty;
            None
        } else {
            self.phase = SearchPhase::Pending;
            Some(self.generation)
        }
    }

    /// Run the filter for a settled lookup.
    ///
    /// Applies only when `generation` is still the latest; a completion for
    /// a superseded keystroke is discarded. Returns whether it applied.
    pub fn complete(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != SearchPhase::Pending {
            return false;
        }
        self.results = filter_candidates(&self.candidates, &self.query);
        self.phase = SearchPhase::Loaded;
        true
    }

    /// Submit the current query (Enter): record it in recents and filter
    /// immediately, skipping the remainder of the settling delay.
    pub fn submit(&mut self) {
        if self.query.trim().is_empty() {
            return;
        }
        self.recents.record(&self.query.clone());
        self.generation += 1;
        self.results = filter_candidates(&self.candidates, &self.query);
        self.phase = SearchPhase::Loaded;
    }

    /// Select a hit: the panel closes and the query resets.
    ///
    /// The submitted query is kept in recents so the lookup can be replayed.
    pub fn choose(&mut self, hit: &SearchHit) -> NavigationTarget {
        self.recents.record(&self.query.clone());
        self.query.clear();
        self.results.clear();
        self.phase = SearchPhase::Idle;
        self.generation += 1;
        hit.target.clone()
    }

    /// Forget all recent queries without affecting search state.
    pub fn clear_recents(&mut self) {
        self.recents.clear();
    }
}

/// Case-insensitive substring match against title and subtitle.
pub fn filter_candidates(candidates: &[SearchHit], query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|hit| {
            hit.title.to_lowercase().contains(&needle)
                || hit.subtitle.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::navigation::ActivePage;

    fn hit(category: SearchCategory, title: &str, subtitle: &str) -> SearchHit {
        SearchHit {
            category,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            target: NavigationTarget::record(ActivePage::Creators, title),
            icon: "◉",
        }
    }

    fn state_with_candidates() -> SearchState {
        let mut state = SearchState::default();
        state.set_candidates(vec![
            hit(SearchCategory::Creator, "Ada Vale", "@adavale · Instagram"),
            hit(SearchCategory::Creator, "Luis Moreno", "@luis.codes · YouTube"),
            hit(SearchCategory::Campaign, "Summer Glow", "Solace Skincare"),
        ]);
        state
    }

    #[test]
    fn opening_transitions_to_empty() {
        let mut state = SearchState::default();
        assert_eq!(state.phase(), SearchPhase::Idle);
        state.open_panel();
        assert_eq!(state.phase(), SearchPhase::Empty);
    }

    #[test]
    fn filter_is_case_insensitive_over_title_and_subtitle() {
        let state = state_with_candidates();
        let by_title = filter_candidates(&state.candidates, "ADA");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Ada Vale");

        let by_subtitle = filter_candidates(&state.candidates, "skincare");
        assert_eq!(by_subtitle.len(), 1);
        assert_eq!(by_subtitle[0].title, "Summer Glow");
    }

    #[test]
    fn last_keystroke_wins() {
        let mut state = state_with_candidates();
        state.open_panel();

        // Three keystrokes inside one settling window.
        let first = state.begin_query("a").expect("lookup scheduled");
        let _second = state.begin_query("ad").expect("lookup scheduled");
        let third = state.begin_query("ada").expect("lookup scheduled");

        // The superseded completion must be discarded.
        assert!(!state.complete(first));
        assert_eq!(state.phase(), SearchPhase::Pending);

        // Only the latest applies, against the full final query.
        assert!(state.complete(third));
        assert_eq!(state.phase(), SearchPhase::Loaded);
        assert_eq!(state.results().len(), 1);
        assert_eq!(state.results()[0].title, "Ada Vale");

        // A late re-delivery is also ignored.
        assert!(!state.complete(third));
    }

    #[test]
    fn clearing_query_clears_results_immediately() {
        let mut state = state_with_candidates();
        state.open_panel();
        let generation = state.begin_query("ada").expect("lookup scheduled");
        assert!(state.complete(generation));
        assert!(!state.results().is_empty());

        assert_eq!(state.begin_query(""), None);
        assert_eq!(state.phase(), SearchPhase::Empty);
        assert!(state.results().is_empty());
    }

    #[test]
    fn settled_query_with_no_matches_is_loaded_not_pending() {
        let mut state = state_with_candidates();
        state.open_panel();
        let generation = state.begin_query("zzz").expect("lookup scheduled");
        assert_eq!(state.phase(), SearchPhase::Pending);
        assert!(state.complete(generation));
        assert_eq!(state.phase(), SearchPhase::Loaded);
        assert!(state.results().is_empty());
    }

    #[test]
    fn dismiss_keeps_query_and_recents() {
        let mut state = state_with_candidates();
        state.open_panel();
        state.begin_query("ada");
        state.submit();
        let recents_before = state.recents().entries().to_vec();

        state.dismiss();
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert_eq!(state.query(), "ada");
        assert_eq!(state.recents().entries(), recents_before.as_slice());
    }

    #[test]
    fn dismiss_invalidates_inflight_lookup() {
        let mut state = state_with_candidates();
        state.open_panel();
        let generation = state.begin_query("ada").expect("lookup scheduled");
        state.dismiss();
        assert!(!state.complete(generation), "stale lookup discarded after close");
    }

    #[test]
    fn choosing_a_hit_closes_and_clears() {
        let mut state = state_with_candidates();
        state.open_panel();
        state.begin_query("ada");
        state.submit();
        let selected = state.results()[0].clone();

        let target = state.choose(&selected);
        assert_eq!(target, NavigationTarget::record(ActivePage::Creators, "Ada Vale"));
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert_eq!(state.recents().entries(), ["ada"]);
    }

    #[test]
    fn submit_records_recents_and_loads() {
        let mut state = state_with_candidates();
        state.open_panel();
        state.begin_query("luis");
        state.submit();
        assert_eq!(state.phase(), SearchPhase::Loaded);
        assert_eq!(state.results().len(), 1);
        assert_eq!(state.recents().entries(), ["luis"]);
    }

    #[test]
    fn clear_recents_leaves_search_untouched() {
        let mut state = state_with_candidates();
        state.open_panel();
        state.begin_query("ada");
        state.submit();
        state.clear_recents();
        assert!(state.recents().is_empty());
        assert_eq!(state.phase(), SearchPhase::Loaded);
        assert_eq!(state.query(), "ada");
    }
}
