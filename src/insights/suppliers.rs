//! Supplier price comparison
//!
//! Average price per kilogram of each item at each supplier, over the
//! whole history. Spend and weight are accumulated separately so the
//! average is Σprice / Σweight: a single 5 kg purchase weighs five times
//! as much as a 1 kg one, instead of each purchase counting once.

use serde::Serialize;
use std::collections::BTreeMap;

use super::normalize::normalize_name;
use crate::models::{Money, Transaction};

/// Accumulated purchases of one item at one supplier
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SupplierTotals {
    pub total_spend: Money,
    pub total_weight: f64,
}

impl SupplierTotals {
    /// Price per kilogram, `None` when no weight was accumulated
    pub fn average_unit_price(&self) -> Option<f64> {
        if self.total_weight > 0.0 {
            Some(self.total_spend.as_decimal() / self.total_weight)
        } else {
            None
        }
    }
}

/// Flattened comparison row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierPriceEntry {
    pub item_name: String,
    pub supplier_name: String,
    /// Price per kilogram
    pub average_unit_price: f64,
}

/// Item name -> supplier -> totals
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SupplierComparison {
    items: BTreeMap<String, BTreeMap<String, SupplierTotals>>,
}

impl SupplierComparison {
    /// Totals for one item, keyed by supplier
    pub fn item(&self, name: &str) -> Option<&BTreeMap<String, SupplierTotals>> {
        self.items.get(&normalize_name(name))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// One row per (item, supplier), sorted by item then supplier
    pub fn entries(&self) -> Vec<SupplierPriceEntry> {
        self.items
            .iter()
            .flat_map(|(item_name, suppliers)| {
                suppliers.iter().filter_map(move |(supplier_name, totals)| {
                    totals
                        .average_unit_price()
                        .map(|average_unit_price| SupplierPriceEntry {
                            item_name: item_name.clone(),
                            supplier_name: supplier_name.clone(),
                            average_unit_price,
                        })
                })
            })
            .collect()
    }

    /// The supplier with the lowest price per kilogram for an item
    ///
    /// Ties go to the supplier name that sorts first.
    pub fn cheapest_supplier(&self, item: &str) -> Option<SupplierPriceEntry> {
        let suppliers = self.item(item)?;

        suppliers
            .iter()
            .filter_map(|(supplier, totals)| totals.average_unit_price().map(|p| (supplier, p)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(supplier, average_unit_price)| SupplierPriceEntry {
                item_name: normalize_name(item),
                supplier_name: supplier.clone(),
                average_unit_price,
            })
    }
}

/// Build the per-supplier comparison from the full history
///
/// Only grocery transactions with a supplier name contribute, and only
/// items with both a positive weight and a positive price.
pub fn compare_suppliers(transactions: &[Transaction]) -> SupplierComparison {
    let mut comparison = SupplierComparison::default();

    for txn in transactions {
        let Some(supplier) = txn.supplier_name() else {
            continue;
        };

        for item in txn.grocery_lines() {
            let Some(weight) = item.positive_weight() else {
                continue;
            };
            if !item.price.is_positive() {
                continue;
            }

            let totals = comparison
                .items
                .entry(normalize_name(&item.name))
                .or_default()
                .entry(supplier.to_string())
                .or_default();
            totals.total_spend += item.price;
            totals.total_weight += weight;
        }
    }

    tracing::debug!(
        transactions = transactions.len(),
        items = comparison.len(),
        "compared suppliers"
    );

    comparison
}
