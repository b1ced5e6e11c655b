//! Format - Presentation Formatting Utilities

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Format a UTC datetime for display
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a date for display
pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Format time with milliseconds (log panel)
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Format a number with thousand separators
pub fn format_number(n: i64) -> String {
    let s = n.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format an amount in cents as US dollars, e.g. `$1,234.56`
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}${}.{:02}", format_number(abs / 100), abs % 100)
}

/// Compact follower counts: 950, 12.4K, 1.2M
pub fn format_followers(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Format an engagement rate as a percentage
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.1}%")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numbers_are_grouped() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-1234), "-1,234");
    }

    #[test]
    fn currency_from_cents() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(123456), "$1,234.56");
        assert_eq!(format_currency(-9900), "-$99.00");
    }

    #[test]
    fn followers_are_compact() {
        assert_eq!(format_followers(950), "950");
        assert_eq!(format_followers(12_400), "12.4K");
        assert_eq!(format_followers(1_200_000), "1.2M");
    }
}
