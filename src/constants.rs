//! Application-wide constants

/// Settling delay for the global search input, in milliseconds.
/// A new keystroke inside this window cancels the pending lookup.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Maximum number of recent search queries kept for the session.
pub const RECENT_QUERY_CAP: usize = 4;

/// Maximum number of page buttons rendered by the page navigator.
pub const PAGE_WINDOW_LEN: usize = 5;

/// Default rows per page for data tables.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Ring buffer capacity for the in-app log panel.
pub const LOG_CAPACITY: usize = 1000;
