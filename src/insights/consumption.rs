//! Monthly consumption by weight
//!
//! Sums the kilograms bought per item over one calendar month, for the
//! market and supermarket categories.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use super::normalize::normalize_name;
use crate::models::{Month, Transaction};

/// Total weight bought of one item in the month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionEntry {
    /// Normalized item name
    pub item_name: String,
    pub total_weight_kg: f64,
}

/// Weight consumed per item in the month of `reference`
///
/// Items without a positive weight are skipped. Sorted by weight
/// descending, then name ascending.
pub fn compute_consumption(transactions: &[Transaction], reference: NaiveDate) -> Vec<ConsumptionEntry> {
    let month = Month::containing(reference);
    let mut totals: HashMap<String, f64> = HashMap::new();

    for txn in transactions.iter().filter(|t| month.contains(t.date)) {
        for item in txn.grocery_lines() {
            if let Some(weight) = item.positive_weight() {
                *totals.entry(normalize_name(&item.name)).or_insert(0.0) += weight;
            }
        }
    }

    let mut entries: Vec<ConsumptionEntry> = totals
        .into_iter()
        .filter(|(_, total)| *total > 0.0)
        .map(|(item_name, total_weight_kg)| ConsumptionEntry {
            item_name,
            total_weight_kg,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total_weight_kg
            .total_cmp(&a.total_weight_kg)
            .then_with(|| a.item_name.cmp(&b.item_name))
    });

    tracing::debug!(
        month = %month,
        transactions = transactions.len(),
        items = entries.len(),
        "computed consumption"
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fixtures::{date, item, market};
    use crate::models::{CategoryId, Money, Transaction};

    #[test]
    fn test_sums_weight_per_normalized_name() {
        let txns = vec![
            market(date(2025, 3, 2), "Souk", vec![item("Tomates", 10).weighing(2.0)]),
            market(date(2025, 3, 9), "Souk", vec![item(" tomates ", 6).weighing(1.5)]),
            market(date(2025, 3, 10), "Souk", vec![item("TOMATES", 4).weighing(0.5)]),
        ];

        let entries = compute_consumption(&txns, date(2025, 3, 20));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].item_name, "tomates");
        assert_eq!(entries[0].total_weight_kg, 4.0);
    }

    #[test]
    fn test_scoped_to_reference_month_and_year() {
        let txns = vec![
            market(date(2025, 3, 31), "Souk", vec![item("Oignons", 5).weighing(1.0)]),
            market(date(2025, 4, 1), "Souk", vec![item("Oignons", 5).weighing(2.0)]),
            market(date(2024, 3, 15), "Souk", vec![item("Oignons", 5).weighing(4.0)]),
        ];

        let entries = compute_consumption(&txns, date(2025, 3, 1));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].total_weight_kg, 1.0);
    }

    #[test]
    fn test_skips_missing_and_non_positive_weights() {
        let txns = vec![market(
            date(2025, 3, 2),
            "Souk",
            vec![
                item("Menthe", 2),
                item("Persil", 2).weighing(0.0),
                item("Ail", 2).weighing(-1.0),
                item("Carottes", 8).weighing(1.0),
            ],
        )];

        let entries = compute_consumption(&txns, date(2025, 3, 2));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].item_name, "carottes");
        assert!(entries.iter().all(|e| e.total_weight_kg > 0.0));
    }

    #[test]
    fn test_ignores_non_grocery_categories() {
        let mut other = Transaction::expense(date(2025, 3, 2), Money::from_units(30), "exp_home");
        other
            .grocery_items
            .push(item("Seau", 30).weighing(1.0));
        let mut supermarket = market(date(2025, 3, 3), "Marjane", vec![item("Riz", 20).weighing(5.0)]);
        supermarket.category_id = CategoryId::supermarket();

        let entries = compute_consumption(&[other, supermarket], date(2025, 3, 3));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].item_name, "riz");
    }

    #[test]
    fn test_order_weight_desc_then_name() {
        let txns = vec![market(
            date(2025, 3, 2),
            "Souk",
            vec![
                item("Pommes", 10).weighing(1.0),
                item("Bananes", 10).weighing(1.0),
                item("Oranges", 10).weighing(3.0),
            ],
        )];

        let names: Vec<_> = compute_consumption(&txns, date(2025, 3, 2))
            .into_iter()
            .map(|e| e.item_name)
            .collect();
        assert_eq!(names, vec!["oranges", "bananes", "pommes"]);
    }

    #[test]
    fn test_idempotent() {
        let txns = vec![market(
            date(2025, 3, 2),
            "Souk",
            vec![item("Pommes", 10).weighing(1.25), item("Poires", 10).weighing(2.0)],
        )];
        assert_eq!(
            compute_consumption(&txns, date(2025, 3, 2)),
            compute_consumption(&txns, date(2025, 3, 2))
        );
    }
}
