use log::debug;
use rust_decimal::Decimal;

use crate::constants::DECIMAL_PRECISION;
use crate::portfolio::history::{PriceHistoryStats, PriceRange};
use crate::portfolio::holdings::PriceHistoryEntry;
use crate::utils::decimal_utils::{percent_of, round_percent};

/// Computes summary statistics over a price log.
///
/// The window is ordered by date descending and the change figures compare
/// the most recent entry with the earliest one in the window. Empty and
/// single-entry logs yield an all-zero result rather than an error: a thin
/// history is a fact about the data, not a failure.
pub fn analyze_price_history(entries: &[PriceHistoryEntry]) -> PriceHistoryStats {
    if entries.len() < 2 {
        debug!(
            "Price history has {} entries; not enough for statistics",
            entries.len()
        );
        return PriceHistoryStats::zero();
    }

    let mut sorted: Vec<&PriceHistoryEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut min = sorted[0].price;
    let mut max = sorted[0].price;
    let mut sum = Decimal::ZERO;
    for entry in &sorted {
        min = min.min(entry.price);
        max = max.max(entry.price);
        sum += entry.price;
    }

    let newest = sorted[0].price;
    let earliest = sorted[sorted.len() - 1].price;
    let price_change = newest - earliest;

    PriceHistoryStats {
        average_price: (sum / Decimal::new(sorted.len() as i64, 0)).round_dp(DECIMAL_PRECISION),
        price_range: PriceRange { min, max },
        price_change,
        price_change_percent: round_percent(percent_of(price_change, earliest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rust_decimal_macros::dec;

    fn entry(price: Decimal, rfc3339: &str) -> PriceHistoryEntry {
        PriceHistoryEntry {
            price,
            quantity: dec!(10),
            date: DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
            notes: None,
        }
    }

    #[test]
    fn test_empty_history_is_all_zero() {
        assert_eq!(analyze_price_history(&[]), PriceHistoryStats::zero());
    }

    #[test]
    fn test_single_entry_is_all_zero() {
        let entries = vec![entry(dec!(100), "2025-01-01T00:00:00Z")];
        assert_eq!(analyze_price_history(&entries), PriceHistoryStats::zero());
    }

    #[test]
    fn test_change_is_newest_minus_earliest() {
        // Deliberately unsorted input: ordering is the analyzer's job.
        let entries = vec![
            entry(dec!(110), "2025-02-01T00:00:00Z"),
            entry(dec!(100), "2025-01-01T00:00:00Z"),
            entry(dec!(120), "2025-03-01T00:00:00Z"),
        ];

        let stats = analyze_price_history(&entries);
        assert_eq!(stats.price_change, dec!(20));
        assert_eq!(stats.price_change_percent, dec!(20));
        assert_eq!(stats.average_price, dec!(110));
        assert_eq!(stats.price_range.min, dec!(100));
        assert_eq!(stats.price_range.max, dec!(120));
    }

    #[test]
    fn test_negative_change() {
        let entries = vec![
            entry(dec!(80), "2025-02-01T00:00:00Z"),
            entry(dec!(100), "2025-01-01T00:00:00Z"),
        ];

        let stats = analyze_price_history(&entries);
        assert_eq!(stats.price_change, dec!(-20));
        assert_eq!(stats.price_change_percent, dec!(-20));
    }

    #[test]
    fn test_zero_earliest_price_guards_percent() {
        let entries = vec![
            entry(dec!(50), "2025-02-01T00:00:00Z"),
            entry(Decimal::ZERO, "2025-01-01T00:00:00Z"),
        ];

        let stats = analyze_price_history(&entries);
        assert_eq!(stats.price_change, dec!(50));
        assert_eq!(stats.price_change_percent, Decimal::ZERO);
    }
}
