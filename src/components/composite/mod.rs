//! Composite - Higher-Level Components

pub mod data_table;
pub mod global_search;
pub mod modal;
