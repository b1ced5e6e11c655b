//! CreatorsState - Creator Roster Page State

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::creator::Creator;
use crate::helpers::paging;

/// State for the creators page: the current page of rows plus paging info
#[derive(Debug, Clone)]
pub struct CreatorsState {
    /// Rows for the current page
    pub rows: Vec<Creator>,
    /// Total rows across all pages (server-reported)
    pub total_items: usize,
    /// Current 1-based page
    pub page: usize,
    /// Rows per page
    pub per_page: usize,
    /// Quick filter applied to the visible page
    pub filter: String,
    /// Whether a page load is in flight
    pub loading: bool,
    /// Record to highlight after a search navigation
    pub reveal_id: Option<String>,
}

impl Default for CreatorsState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_items: 0,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            filter: String::new(),
            loading: false,
            reveal_id: None,
        }
    }
}

impl CreatorsState {
    /// Apply a loaded page of rows
    pub fn apply_page(&mut self, rows: Vec<Creator>, total_items: usize, page: usize) {
        self.rows = rows;
        self.total_items = total_items;
        self.page = page;
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
    }

    pub fn total_pages(&self) -> usize {
        paging::total_pages(self.total_items, self.per_page)
    }

    /// Rows on the current page matching the quick filter
    pub fn filtered_rows(&self) -> Vec<&Creator> {
        if self.filter.is_empty() {
            self.rows.iter().collect()
        } else {
            let needle = self.filter.to_lowercase();
            self.rows
                .iter()
                .filter(|c| {
                    c.handle.to_lowercase().contains(&needle)
                        || c.display_name.to_lowercase().contains(&needle)
                })
                .collect()
        }
    }

    /// Insert a newly created creator at the top of the current page
    pub fn insert_row(&mut self, creator: Creator) {
        self.rows.insert(0, creator);
        self.total_items += 1;
    }

    /// Drop a deleted creator from the current page
    pub fn remove_row(&mut self, id: &str) {
        let before = self.rows.len();
        self.rows.retain(|c| c.id != id);
        if self.rows.len() < before {
            self.total_items = self.total_items.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn creator(handle: &str, name: &str) -> Creator {
        Creator {
            id: handle.to_string(),
            handle: handle.to_string(),
            display_name: name.to_string(),
            ..Creator::default()
        }
    }

    #[test]
    fn filter_matches_handle_and_name() {
        let mut state = CreatorsState::default();
        state.apply_page(
            vec![creator("adavale", "Ada Vale"), creator("luis", "Luis Moreno")],
            2,
            1,
        );
        state.set_filter("VALE".to_string());
        let rows = state.filtered_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].handle, "adavale");
    }

    #[test]
    fn total_pages_tracks_server_total() {
        let mut state = CreatorsState::default();
        state.apply_page(Vec::new(), 193, 1);
        assert_eq!(state.total_pages(), 8);
    }

    #[test]
    fn remove_row_adjusts_total() {
        let mut state = CreatorsState::default();
        state.apply_page(vec![creator("adavale", "Ada Vale")], 10, 1);
        state.remove_row("adavale");
        assert!(state.rows.is_empty());
        assert_eq!(state.total_items, 9);

        // Unknown id is a no-op.
        state.remove_row("nope");
        assert_eq!(state.total_items, 9);
    }
}
