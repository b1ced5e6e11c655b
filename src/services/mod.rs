//! Services - Background Data Access
//!
//! Everything that leaves the process lives here: the REST client for the
//! hosted database, the offline sample dataset, and the hub that runs both
//! on a dedicated service thread.

pub mod api;
pub mod sample;
pub mod service_hub;
