//! Domain - Core Data Models

pub mod campaign;
pub mod config;
pub mod creator;
pub mod payment;
pub mod stats;
