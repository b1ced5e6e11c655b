//! StatsState - Dashboard Aggregates State

use crate::domain::stats::AgencyStats;

/// State for the dashboard page
#[derive(Debug, Clone, Default)]
pub struct StatsState {
    /// Latest aggregates, if loaded
    pub stats: Option<AgencyStats>,
    /// Whether a refresh is in flight
    pub loading: bool,
}

impl StatsState {
    pub fn apply(&mut self, stats: AgencyStats) {
        self.stats = Some(stats);
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
