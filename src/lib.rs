//! Beacon Admin Library
//!
//! This crate provides the main application logic for Beacon Admin, a native
//! dashboard client for influencer-marketing operations: creator roster,
//! campaign tracking, and payout review backed by a hosted database REST API.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
