//! Best deal per essential item
//!
//! For every essential item, keeps the single purchase worth repeating:
//! the cheapest one among the best quality seen, and never a cheap `Bad`
//! purchase once a better one exists.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use super::normalize::{display_name, normalize_name, supplier_or_unknown};
use crate::models::{Money, Quality, Transaction};

/// The recommended purchase for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestDealEntry {
    /// Normalized item name
    pub item_name: String,
    pub best_supplier: String,
    pub best_price: Money,
    pub best_quality: Quality,
    /// Date of the winning purchase
    pub last_purchase_date: NaiveDate,
}

impl BestDealEntry {
    /// Item name for presentation
    pub fn display_name(&self) -> String {
        display_name(&self.item_name)
    }
}

/// Whether a candidate purchase replaces the stored best deal
///
/// 1. a stored `Bad` loses to any candidate that is not `Bad`;
/// 2. when qualities are equal, or the candidate is `Good` and the stored
///    one is not, the strictly lower price wins;
/// 3. otherwise the stored deal stays.
pub fn should_replace(
    stored_quality: Quality,
    stored_price: Money,
    candidate_quality: Quality,
    candidate_price: Money,
) -> bool {
    if stored_quality == Quality::Bad && candidate_quality != Quality::Bad {
        return true;
    }

    let comparable = stored_quality == candidate_quality
        || (stored_quality != Quality::Good && candidate_quality == Quality::Good);

    comparable && candidate_price < stored_price
}

/// Resolve the best deal for each essential item, sorted by item name
pub fn resolve_best_deals(transactions: &[Transaction]) -> Vec<BestDealEntry> {
    let mut deals: BTreeMap<String, BestDealEntry> = BTreeMap::new();

    for txn in transactions {
        for item in txn.grocery_lines().iter().filter(|i| i.is_essential) {
            let item_name = normalize_name(&item.name);

            let replace = match deals.get(&item_name) {
                None => true,
                Some(stored) => should_replace(
                    stored.best_quality,
                    stored.best_price,
                    item.quality,
                    item.price,
                ),
            };

            if replace {
                deals.insert(
                    item_name.clone(),
                    BestDealEntry {
                        item_name,
                        best_supplier: supplier_or_unknown(txn.supplier_name()),
                        best_price: item.price,
                        best_quality: item.quality,
                        last_purchase_date: txn.date,
                    },
                );
            }
        }
    }

    tracing::debug!(
        transactions = transactions.len(),
        items = deals.len(),
        "resolved best deals"
    );

    deals.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fixtures::{date, essential, market};
    use crate::insights::normalize::UNKNOWN_SUPPLIER;
    use crate::models::GroceryItem;

    fn deal_for(txns: &[Transaction], name: &str) -> BestDealEntry {
        resolve_best_deals(txns)
            .into_iter()
            .find(|d| d.item_name == name)
            .unwrap()
    }

    #[test]
    fn test_quality_dominates_lower_price() {
        let txns = vec![
            market(date(2025, 2, 1), "A", vec![essential("Tomates", 10, Quality::Bad)]),
            market(date(2025, 2, 8), "B", vec![essential("Tomates", 15, Quality::Good)]),
        ];

        let deal = deal_for(&txns, "tomates");
        assert_eq!(deal.best_supplier, "B");
        assert_eq!(deal.best_price, Money::from_units(15));
        assert_eq!(deal.best_quality, Quality::Good);
        assert_eq!(deal.last_purchase_date, date(2025, 2, 8));
    }

    #[test]
    fn test_price_wins_when_quality_ties() {
        let txns = vec![
            market(date(2025, 2, 1), "A", vec![essential("Tomates", 10, Quality::Good)]),
            market(date(2025, 2, 8), "B", vec![essential("Tomates", 8, Quality::Good)]),
        ];

        let deal = deal_for(&txns, "tomates");
        assert_eq!(deal.best_supplier, "B");
        assert_eq!(deal.best_price, Money::from_units(8));
        assert_eq!(deal.best_quality, Quality::Good);
    }

    #[test]
    fn test_equal_price_keeps_first_seen() {
        let txns = vec![
            market(date(2025, 2, 1), "A", vec![essential("Lait", 7, Quality::Average)]),
            market(date(2025, 2, 8), "B", vec![essential("Lait", 7, Quality::Average)]),
        ];

        assert_eq!(deal_for(&txns, "lait").best_supplier, "A");
    }

    #[test]
    fn test_bad_never_replaces_better_quality() {
        let txns = vec![
            market(date(2025, 2, 1), "A", vec![essential("Oeufs", 20, Quality::Average)]),
            market(date(2025, 2, 8), "B", vec![essential("Oeufs", 5, Quality::Bad)]),
        ];

        assert_eq!(deal_for(&txns, "oeufs").best_supplier, "A");
    }

    #[test]
    fn test_tie_break_rule_table() {
        use Quality::{Average, Bad, Good};
        let cheap = Money::from_units(5);
        let dear = Money::from_units(9);

        // stored Bad: any non-Bad candidate wins, whatever the price
        assert!(should_replace(Bad, cheap, Average, dear));
        assert!(should_replace(Bad, cheap, Good, dear));
        assert!(should_replace(Bad, dear, Bad, cheap));
        assert!(!should_replace(Bad, cheap, Bad, dear));

        // candidate Good against a non-Good stored entry: only if cheaper
        assert!(should_replace(Average, dear, Good, cheap));
        assert!(!should_replace(Average, cheap, Good, dear));

        // equal qualities: strictly cheaper wins
        assert!(should_replace(Good, dear, Good, cheap));
        assert!(!should_replace(Good, cheap, Good, cheap));

        // a stored Good is never displaced by a lesser tier
        assert!(!should_replace(Good, dear, Average, cheap));
        assert!(!should_replace(Good, dear, Bad, cheap));
        assert!(!should_replace(Average, dear, Bad, cheap));
    }

    #[test]
    fn test_only_essential_items() {
        let txns = vec![market(
            date(2025, 2, 1),
            "A",
            vec![
                GroceryItem::new("Chips", Money::from_units(5)),
                essential("Farine", 12, Quality::Good),
            ],
        )];

        let deals = resolve_best_deals(&txns);
        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].item_name, "farine");
        assert_eq!(deals[0].display_name(), "Farine");
    }

    #[test]
    fn test_missing_supplier_uses_placeholder() {
        let mut txn = market(date(2025, 2, 1), "", vec![essential("Sucre", 9, Quality::Good)]);
        txn.supplier = None;

        assert_eq!(deal_for(&[txn], "sucre").best_supplier, UNKNOWN_SUPPLIER);

        let empty = market(date(2025, 2, 1), "", vec![essential("Sucre", 9, Quality::Good)]);
        assert_eq!(deal_for(&[empty], "sucre").best_supplier, UNKNOWN_SUPPLIER);
    }

    #[test]
    fn test_blank_supplier_is_kept_verbatim() {
        let txn = market(date(2025, 2, 1), "   ", vec![essential("Riz", 10, Quality::Good)]);
        assert_eq!(deal_for(&[txn], "riz").best_supplier, "   ");
    }

    #[test]
    fn test_sorted_by_item_name() {
        let txns = vec![market(
            date(2025, 2, 1),
            "A",
            vec![
                essential("Thé", 20, Quality::Good),
                essential(" café", 30, Quality::Good),
                essential("Beurre", 15, Quality::Good),
            ],
        )];

        let names: Vec<_> = resolve_best_deals(&txns)
            .into_iter()
            .map(|d| d.item_name)
            .collect();
        assert_eq!(names, vec!["beurre", "café", "thé"]);
    }

    #[test]
    fn test_idempotent() {
        let txns = vec![
            market(date(2025, 2, 1), "A", vec![essential("Riz", 10, Quality::Bad)]),
            market(date(2025, 2, 2), "B", vec![essential("Riz", 12, Quality::Average)]),
        ];
        assert_eq!(resolve_best_deals(&txns), resolve_best_deals(&txns));
    }
}
