//! Restock suggestions
//!
//! Essential items that have not been bought within the freshness window
//! are due for restocking, most overdue first.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::HashMap;

use super::normalize::{display_name, normalize_name};
use crate::models::Transaction;

/// Days after which an essential item is due for restock
pub const FRESHNESS_WINDOW_DAYS: i64 = 7;

const MILLIS_PER_DAY: u64 = 86_400_000;

/// An essential item overdue for restocking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestockSuggestion {
    /// Normalized item name
    pub item_name: String,
    pub days_since_last_purchase: i64,
}

impl RestockSuggestion {
    /// Item name for presentation
    pub fn display_name(&self) -> String {
        display_name(&self.item_name)
    }
}

/// Whole days between a purchase date (taken at midnight) and `now`, rounded up
pub fn days_since(last_purchase: NaiveDate, now: NaiveDateTime) -> i64 {
    let elapsed = (now - last_purchase.and_time(NaiveTime::MIN))
        .num_milliseconds()
        .unsigned_abs();
    elapsed.div_ceil(MILLIS_PER_DAY) as i64
}

/// Essential items not bought in the last seven days
pub fn suggest_restocks(transactions: &[Transaction], now: NaiveDateTime) -> Vec<RestockSuggestion> {
    suggest_restocks_within(transactions, now, FRESHNESS_WINDOW_DAYS)
}

/// Essential items not bought in the last `window_days` days
///
/// Sorted by days since last purchase descending, then name ascending.
pub fn suggest_restocks_within(
    transactions: &[Transaction],
    now: NaiveDateTime,
    window_days: i64,
) -> Vec<RestockSuggestion> {
    let mut last_purchase: HashMap<String, NaiveDate> = HashMap::new();

    for txn in transactions {
        for item in txn.grocery_lines().iter().filter(|i| i.is_essential) {
            last_purchase
                .entry(normalize_name(&item.name))
                .and_modify(|d| *d = (*d).max(txn.date))
                .or_insert(txn.date);
        }
    }

    let mut suggestions: Vec<RestockSuggestion> = last_purchase
        .into_iter()
        .map(|(item_name, date)| RestockSuggestion {
            item_name,
            days_since_last_purchase: days_since(date, now),
        })
        .filter(|s| s.days_since_last_purchase > window_days)
        .collect();

    suggestions.sort_by(|a, b| {
        b.days_since_last_purchase
            .cmp(&a.days_since_last_purchase)
            .then_with(|| a.item_name.cmp(&b.item_name))
    });

    tracing::debug!(
        window_days,
        suggestions = suggestions.len(),
        "computed restock suggestions"
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fixtures::{date, essential, item, market, midnight};
    use crate::models::Quality;

    #[test]
    fn test_freshness_threshold_boundary() {
        let now = midnight(2025, 3, 20);

        let seven_days = vec![market(date(2025, 3, 13), "A", vec![essential("Lait", 7, Quality::Good)])];
        assert!(suggest_restocks(&seven_days, now).is_empty());

        let eight_days = vec![market(date(2025, 3, 12), "A", vec![essential("Lait", 7, Quality::Good)])];
        let suggestions = suggest_restocks(&eight_days, now);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].item_name, "lait");
        assert_eq!(suggestions[0].days_since_last_purchase, 8);
    }

    #[test]
    fn test_partial_days_round_up() {
        let last = date(2025, 3, 13);
        let now = date(2025, 3, 20).and_hms_opt(9, 30, 0).unwrap();
        assert_eq!(days_since(last, now), 8);
        assert_eq!(days_since(last, midnight(2025, 3, 20)), 7);
        assert_eq!(days_since(last, midnight(2025, 3, 13)), 0);

        let just_after = date(2025, 3, 13).and_hms_milli_opt(0, 0, 0, 1).unwrap();
        assert_eq!(days_since(last, just_after), 1);
    }

    #[test]
    fn test_uses_most_recent_purchase() {
        let now = midnight(2025, 3, 20);
        let txns = vec![
            market(date(2025, 3, 18), "A", vec![essential("Pain", 2, Quality::Good)]),
            market(date(2025, 1, 1), "A", vec![essential(" PAIN", 2, Quality::Good)]),
        ];
        assert!(suggest_restocks(&txns, now).is_empty());
    }

    #[test]
    fn test_only_essential_items() {
        let now = midnight(2025, 3, 20);
        let txns = vec![market(
            date(2025, 1, 1),
            "A",
            vec![item("Bonbons", 3), essential("Huile", 25, Quality::Average)],
        )];

        let names: Vec<_> = suggest_restocks(&txns, now)
            .into_iter()
            .map(|s| s.item_name)
            .collect();
        assert_eq!(names, vec!["huile"]);
    }

    #[test]
    fn test_most_overdue_first() {
        let now = midnight(2025, 3, 31);
        let txns = vec![
            market(date(2025, 3, 20), "A", vec![essential("Riz", 10, Quality::Good)]),
            market(date(2025, 3, 1), "A", vec![essential("Sucre", 10, Quality::Good)]),
            market(date(2025, 3, 20), "A", vec![essential("Farine", 10, Quality::Good)]),
        ];

        let suggestions = suggest_restocks(&txns, now);
        let rows: Vec<_> = suggestions
            .iter()
            .map(|s| (s.item_name.as_str(), s.days_since_last_purchase))
            .collect();
        assert_eq!(rows, vec![("sucre", 30), ("farine", 11), ("riz", 11)]);
        assert_eq!(suggestions[0].display_name(), "Sucre");
    }

    #[test]
    fn test_custom_window() {
        let now = midnight(2025, 3, 20);
        let txns = vec![market(date(2025, 3, 16), "A", vec![essential("Lait", 7, Quality::Good)])];

        assert!(suggest_restocks(&txns, now).is_empty());
        assert_eq!(suggest_restocks_within(&txns, now, 3).len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let now = midnight(2025, 3, 20);
        let txns = vec![market(date(2025, 1, 1), "A", vec![essential("Lait", 7, Quality::Good)])];
        assert_eq!(suggest_restocks(&txns, now), suggest_restocks(&txns, now));
    }
}
