//! Sample - Offline Dataset
//!
//! Served by the hub when no API backend is configured, so the app is fully
//! navigable out of the box. Shapes match what the REST tables return.

use chrono::{Duration, NaiveDate, Utc};

use crate::domain::campaign::{Campaign, CampaignStatus};
use crate::domain::creator::{Creator, CreatorStatus, Platform};
use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::stats::AgencyStats;

fn creator(
    n: u32,
    handle: &str,
    name: &str,
    platform: Platform,
    followers: u64,
    rate: f64,
    status: CreatorStatus,
) -> Creator {
    Creator {
        id: format!("cr-{n:04}"),
        handle: handle.to_string(),
        display_name: name.to_string(),
        platform,
        followers,
        engagement_rate: rate,
        email: format!("{handle}@example.com"),
        status,
        created_at: Utc::now() - Duration::days(30 * n as i64),
    }
}

/// Sample creator roster
pub fn creators() -> Vec<Creator> {
    use CreatorStatus::*;
    use Platform::*;
    vec![
        creator(1, "adavale", "Ada Vale", Instagram, 412_000, 4.8, Active),
        creator(2, "luis.codes", "Luis Moreno", Youtube, 1_240_000, 2.9, Active),
        creator(3, "mirachen", "Mira Chen", Tiktok, 885_000, 7.2, Active),
        creator(4, "tomwilder", "Tom Wilder", Twitch, 96_500, 5.1, Paused),
        creator(5, "sofiaruna", "Sofia Runa", Instagram, 233_000, 3.7, Active),
        creator(6, "kbeats", "Kai Beaton", Tiktok, 1_910_000, 6.4, Active),
        creator(7, "ellis.tv", "Ellis Grant", Youtube, 540_000, 3.1, Active),
        creator(8, "noor.fit", "Noor Hadid", Instagram, 178_000, 5.9, Active),
        creator(9, "pixelpau", "Paulina Voss", Twitch, 64_200, 4.2, Offboarded),
        creator(10, "junejune", "June Okafor", Tiktok, 2_450_000, 8.0, Active),
        creator(11, "marcusvl", "Marcus Vlahos", Youtube, 310_000, 2.4, Paused),
        creator(12, "renatrip", "Rena Ito", Instagram, 725_000, 4.5, Active),
    ]
}

fn campaign(
    n: u32,
    name: &str,
    brand: &str,
    status: CampaignStatus,
    budget_cents: i64,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    creator_count: u32,
) -> Campaign {
    Campaign {
        id: format!("cp-{n:04}"),
        name: name.to_string(),
        brand: brand.to_string(),
        status,
        budget_cents,
        starts_on: NaiveDate::from_ymd_opt(start.0, start.1, start.2)
            .unwrap_or_default(),
        ends_on: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap_or_default(),
        creator_count,
    }
}

/// Sample campaigns
pub fn campaigns() -> Vec<Campaign> {
    use CampaignStatus::*;
    vec![
        campaign(1, "Summer Glow", "Solace Skincare", Active, 4_500_000, (2026, 6, 1), (2026, 8, 31), 6),
        campaign(2, "Desk Setup Week", "Northlight Audio", Active, 2_200_000, (2026, 7, 10), (2026, 9, 10), 4),
        campaign(3, "Back to Campus", "Stride Apparel", Draft, 6_000_000, (2026, 8, 20), (2026, 10, 1), 0),
        campaign(4, "Hydrate Daily", "Verve Water", Completed, 1_800_000, (2026, 3, 1), (2026, 5, 1), 5),
        campaign(5, "Game Night Live", "Pixel Forge", Active, 3_750_000, (2026, 5, 15), (2026, 9, 30), 3),
        campaign(6, "Clean Plates", "Harvest Kitchen", Completed, 950_000, (2026, 1, 10), (2026, 2, 28), 2),
        campaign(7, "Winter Drop Teaser", "Stride Apparel", Cancelled, 2_400_000, (2026, 2, 1), (2026, 2, 20), 0),
        campaign(8, "Creator Collab Box", "Solace Skincare", Active, 5_100_000, (2026, 7, 1), (2026, 12, 15), 8),
    ]
}

fn payment(
    n: u32,
    handle: &str,
    campaign: &str,
    amount_cents: i64,
    status: PaymentStatus,
    paid_days_ago: Option<i64>,
) -> Payment {
    Payment {
        id: format!("pay-{n:04}"),
        creator_handle: handle.to_string(),
        campaign_name: campaign.to_string(),
        amount_cents,
        status,
        paid_at: paid_days_ago.map(|d| Utc::now() - Duration::days(d)),
    }
}

/// Sample payouts
pub fn payments() -> Vec<Payment> {
    use PaymentStatus::*;
    vec![
        payment(1, "adavale", "Summer Glow", 350_000, Paid, Some(12)),
        payment(2, "mirachen", "Summer Glow", 420_000, Paid, Some(12)),
        payment(3, "kbeats", "Summer Glow", 610_000, Pending, None),
        payment(4, "luis.codes", "Desk Setup Week", 275_000, Paid, Some(30)),
        payment(5, "ellis.tv", "Desk Setup Week", 190_000, Pending, None),
        payment(6, "tomwilder", "Game Night Live", 145_000, Failed, None),
        payment(7, "junejune", "Creator Collab Box", 880_000, Pending, None),
        payment(8, "noor.fit", "Hydrate Daily", 120_000, Paid, Some(75)),
        payment(9, "sofiaruna", "Hydrate Daily", 135_000, Paid, Some(75)),
        payment(10, "renatrip", "Creator Collab Box", 460_000, Pending, None),
    ]
}

/// Aggregates derived from the sample tables
pub fn stats() -> AgencyStats {
    let creators = creators();
    let campaigns = campaigns();
    let payments = payments();

    let pending_payout_cents = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Pending)
        .map(|p| p.amount_cents)
        .sum();

    AgencyStats {
        creator_count: creators.len(),
        active_campaigns: campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .count(),
        pending_payout_cents,
        month_spend_cents: 1_265_000,
        monthly_spend: vec![
            ("Mar".to_string(), 255_000),
            ("Apr".to_string(), 410_000),
            ("May".to_string(), 380_000),
            ("Jun".to_string(), 770_000),
            ("Jul".to_string(), 1_030_000),
            ("Aug".to_string(), 1_265_000),
        ],
    }
}

/// Slice a full sample table into one page plus the total count
pub fn page_of<T: Clone>(rows: &[T], page: usize, per_page: usize) -> (Vec<T>, usize) {
    let total = rows.len();
    let start = (page.saturating_sub(1)) * per_page;
    let slice = rows
        .iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect();
    (slice, total)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn page_of_slices_and_reports_total() {
        let rows: Vec<u32> = (1..=12).collect();
        let (page1, total) = page_of(&rows, 1, 5);
        assert_eq!(page1, vec![1, 2, 3, 4, 5]);
        assert_eq!(total, 12);

        let (page3, _) = page_of(&rows, 3, 5);
        assert_eq!(page3, vec![11, 12]);

        let (beyond, _) = page_of(&rows, 4, 5);
        assert!(beyond.is_empty());
    }
}
