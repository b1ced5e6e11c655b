//! AppConfig - Application Configuration
//!
//! Loaded from a TOML file in the platform data directory. When no API
//! section is configured the app runs against built-in sample data.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;

/// Connection details for the hosted database REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the hosted backend, e.g. `https://xyz.supabase.co`
    pub base_url: String,
    /// Service API key sent as `apikey` and bearer token
    pub api_key: String,
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hosted backend; `None` means offline sample data
    pub api: Option<ApiConfig>,
    /// Rows per page for data tables
    pub page_size: Option<usize>,
}

impl AppConfig {
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
