//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, controller, and local widgets.

pub mod campaigns;
pub mod creators;
pub mod dashboard;
pub mod payments;
