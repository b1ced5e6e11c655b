//! CampaignsState - Campaign Page State

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::campaign::Campaign;
use crate::helpers::paging;

/// State for the campaigns page
#[derive(Debug, Clone)]
pub struct CampaignsState {
    /// Rows for the current page
    pub rows: Vec<Campaign>,
    /// Total rows across all pages
    pub total_items: usize,
    /// Current 1-based page
    pub page: usize,
    /// Rows per page
    pub per_page: usize,
    /// Quick filter applied to the visible page
    pub filter: String,
    /// Whether a page load is in flight
    pub loading: bool,
}

impl Default for CampaignsState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_items: 0,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            filter: String::new(),
            loading: false,
        }
    }
}

impl CampaignsState {
    pub fn apply_page(&mut self, rows: Vec<Campaign>, total_items: usize, page: usize) {
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
    pub fn filtered_rows(&self) -> Vec<&Campaign> {
        if self.filter.is_empty() {
            self.rows.iter().collect()
        } else {
            let needle = self.filter.to_lowercase();
            self.rows
                .iter()
                .filter(|c| {
                    c.name.to_lowercase().contains(&needle)
                        || c.brand.to_lowercase().contains(&needle)
                })
                .collect()
        }
    }
}
