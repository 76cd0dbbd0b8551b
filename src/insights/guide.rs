//! Bundled views
//!
//! The shopping guide (what to buy and where) and the market report (how
//! much was eaten and what each supplier charges) are shown together, so
//! they are built together.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::best_deal::{resolve_best_deals, BestDealEntry};
use super::consumption::{compute_consumption, ConsumptionEntry};
use super::restock::{suggest_restocks_within, RestockSuggestion};
use super::suppliers::{compare_suppliers, SupplierComparison};
use crate::models::Transaction;

/// Best deals plus items due for restock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingGuide {
    pub best_deals: Vec<BestDealEntry>,
    pub restock: Vec<RestockSuggestion>,
}

impl ShoppingGuide {
    pub fn build(transactions: &[Transaction], now: NaiveDateTime, window_days: i64) -> Self {
        Self {
            best_deals: resolve_best_deals(transactions),
            restock: suggest_restocks_within(transactions, now, window_days),
        }
    }
}

/// Monthly consumption plus the all-time supplier comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketReport {
    pub consumption: Vec<ConsumptionEntry>,
    pub suppliers: SupplierComparison,
}

impl MarketReport {
    pub fn build(transactions: &[Transaction], reference: NaiveDate) -> Self {
        Self {
            consumption: compute_consumption(transactions, reference),
            suppliers: compare_suppliers(transactions),
        }
    }
}
