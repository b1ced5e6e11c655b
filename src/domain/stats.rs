//! Stats - Dashboard Aggregates

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::payment::{Payment, PaymentStatus};

/// Headline numbers and the monthly-spend series for the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgencyStats {
    /// Creators on the roster
    pub creator_count: usize,
    /// Campaigns currently in flight
    pub active_campaigns: usize,
    /// Sum of unsettled payouts, in cents
    pub pending_payout_cents: i64,
    /// Spend for the current calendar month, in cents
    pub month_spend_cents: i64,
    /// Trailing monthly spend, oldest first: (month label, cents)
    pub monthly_spend: Vec<(String, i64)>,
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Sum settled payouts into a trailing month-by-month series ending at
/// `now`'s calendar month, oldest first.
///
/// Only `Paid` payouts with a settlement date count. Months with no
/// settled payouts appear as zero so the chart keeps a fixed width.
pub fn monthly_spend(
    payments: &[Payment],
    months: usize,
    now: DateTime<Utc>,
) -> Vec<(String, i64)> {
    let newest = now.year() * 12 + now.month0() as i32;
    (0..months)
        .rev()
        .map(|back| {
            let index = newest - back as i32;
            let total = payments
                .iter()
                .filter(|p| p.status == PaymentStatus::Paid)
                .filter_map(|p| p.paid_at.map(|at| (at, p.amount_cents)))
                .filter(|(at, _)| at.year() * 12 + at.month0() as i32 == index)
                .map(|(_, cents)| cents)
                .sum();
            let label = MONTH_LABELS[index.rem_euclid(12) as usize];
            (label.to_string(), total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn payout(cents: i64, status: PaymentStatus, paid: Option<(i32, u32, u32)>) -> Payment {
        Payment {
            id: "pay-test".to_string(),
            creator_handle: "handle".to_string(),
            campaign_name: "campaign".to_string(),
            amount_cents: cents,
            status,
            paid_at: paid.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn settled_payouts_bucket_by_calendar_month() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 0, 0, 0).unwrap();
        let payments = vec![
            payout(350_000, PaymentStatus::Paid, Some((2026, 8, 11))),
            payout(420_000, PaymentStatus::Paid, Some((2026, 8, 2))),
            payout(275_000, PaymentStatus::Paid, Some((2026, 7, 24))),
            payout(255_000, PaymentStatus::Paid, Some((2026, 6, 9))),
        ];

        let series = monthly_spend(&payments, 6, now);
        assert_eq!(
            series,
            vec![
                ("Mar".to_string(), 0),
                ("Apr".to_string(), 0),
                ("May".to_string(), 0),
                ("Jun".to_string(), 255_000),
                ("Jul".to_string(), 275_000),
                ("Aug".to_string(), 770_000),
            ]
        );
    }

    #[test]
    fn unsettled_payouts_are_excluded() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 0, 0, 0).unwrap();
        let payments = vec![
            payout(610_000, PaymentStatus::Pending, None),
            payout(145_000, PaymentStatus::Failed, None),
            // A failed payout keeps any settlement date it briefly had.
            payout(190_000, PaymentStatus::Failed, Some((2026, 8, 5))),
            payout(120_000, PaymentStatus::Paid, Some((2026, 8, 6))),
        ];

        let series = monthly_spend(&payments, 2, now);
        assert_eq!(
            series,
            vec![("Jul".to_string(), 0), ("Aug".to_string(), 120_000)]
        );
    }

    #[test]
    fn window_spans_a_year_boundary() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let payments = vec![
            payout(100_000, PaymentStatus::Paid, Some((2025, 11, 30))),
            payout(200_000, PaymentStatus::Paid, Some((2026, 1, 3))),
        ];

        let series = monthly_spend(&payments, 4, now);
        assert_eq!(
            series,
            vec![
                ("Oct".to_string(), 0),
                ("Nov".to_string(), 100_000),
                ("Dec".to_string(), 0),
                ("Jan".to_string(), 200_000),
            ]
        );
    }
}
