//! DataTable - Paginated Table Components

pub mod column;
pub mod data_table;
pub mod pagination;
