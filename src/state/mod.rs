//! State - Entity State Split by Update Frequency

pub mod campaigns_state;
pub mod creators_state;
pub mod log_state;
pub mod nav_state;
pub mod payments_state;
pub mod search_state;
pub mod stats_state;
