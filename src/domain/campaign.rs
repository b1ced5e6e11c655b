//! Campaign - Brand Campaign Data

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Active => "Active",
            CampaignStatus::Completed => "Completed",
            CampaignStatus::Cancelled => "Cancelled",
        }
    }
}

/// A brand campaign booked through the agency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    /// Unique ID
    pub id: String,
    /// Campaign name
    pub name: String,
    /// Brand / client name
    pub brand: String,
    /// Lifecycle status
    pub status: CampaignStatus,
    /// Total budget in cents
    pub budget_cents: i64,
    /// First day of the flight
    pub starts_on: NaiveDate,
    /// Last day of the flight
    pub ends_on: NaiveDate,
    /// Number of creators booked
    pub creator_count: u32,
}
