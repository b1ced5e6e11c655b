//! NavState - Active Page State

use crate::app::navigation::ActivePage;

/// State for sidebar navigation
#[derive(Debug, Default)]
pub struct NavState {
    /// Currently active page
    pub active_page: ActivePage,
}

impl NavState {
    pub fn set_active_page(&mut self, page: ActivePage) {
        self.active_page = page;
    }
}
