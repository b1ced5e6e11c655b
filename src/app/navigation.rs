//! Navigation - Active Page and Search Targets

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Dashboard with headline stats and spend chart
    #[default]
    Dashboard,
    /// Creators page - roster list
    Creators,
    /// Campaigns page - campaign list
    Campaigns,
    /// Payments page - payout list
    Payments,
}

impl ActivePage {
    /// Get the icon glyph for the page
    pub fn icon(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "◧",
            ActivePage::Creators => "◉",
            ActivePage::Campaigns => "▣",
            ActivePage::Payments => "◈",
        }
    }

    /// Get the page title
    pub fn title(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "Dashboard",
            ActivePage::Creators => "Creators",
            ActivePage::Campaigns => "Campaigns",
            ActivePage::Payments => "Payments",
        }
    }

    /// Get all available pages for the sidebar
    pub fn all() -> &'static [ActivePage] {
        &[
            ActivePage::Dashboard,
            ActivePage::Creators,
            ActivePage::Campaigns,
            ActivePage::Payments,
        ]
    }
}

/// Where a selected search hit navigates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    /// The page to activate
    pub page: ActivePage,
    /// A specific record on that page, if the hit was a record
    pub record_id: Option<String>,
}

impl NavigationTarget {
    /// Target a page itself
    pub fn page(page: ActivePage) -> Self {
        Self {
            page,
            record_id: None,
        }
    }

    /// Target a record on a page
    pub fn record(page: ActivePage, record_id: impl Into<String>) -> Self {
        Self {
            page,
            record_id: Some(record_id.into()),
        }
    }
}
