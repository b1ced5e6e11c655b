//! Helpers - Pure Logic Shared Across Components
//!
//! Plain data structures with no GPUI dependency, so the interaction
//! contracts of the search and pagination components stay unit-testable.

pub mod paging;
pub mod recents;
