//! Payment - Creator Payout Data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Settlement status of a payout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
        }
    }
}

/// A payout owed or made to a creator for campaign work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique ID
    pub id: String,
    /// Handle of the creator being paid
    pub creator_handle: String,
    /// Name of the campaign the payout belongs to
    pub campaign_name: String,
    /// Amount in cents
    pub amount_cents: i64,
    /// Settlement status
    pub status: PaymentStatus,
    /// When the payout settled, if it has
    pub paid_at: Option<DateTime<Utc>>,
}
