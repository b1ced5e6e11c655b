//! Utils - Formatting and Local Storage

pub mod config_store;
pub mod csv;
pub mod format;
