//! Layout - Application Chrome Components

pub mod header;
pub mod log_panel;
pub mod sidebar;
