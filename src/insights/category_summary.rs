//! Expense totals per category, for charts and reports

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{CategoryId, Money, Transaction};

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category_id: CategoryId,
    pub total: Money,
}

impl CategoryTotal {
    /// Share of `grand_total`, in percent
    pub fn percentage_of(&self, grand_total: Money) -> f64 {
        if grand_total.is_zero() {
            0.0
        } else {
            self.total.cents() as f64 / grand_total.cents() as f64 * 100.0
        }
    }
}

/// Group expenses by category, largest total first
///
/// Categories with equal totals keep the order in which they first appear.
pub fn summarize_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut index: HashMap<&CategoryId, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match index.get(&txn.category_id) {
            Some(&i) => totals[i].total += txn.amount,
            None => {
                index.insert(&txn.category_id, totals.len());
                totals.push(CategoryTotal {
                    category_id: txn.category_id.clone(),
                    total: txn.amount,
                });
            }
        }
    }

    // sort_by is stable
    totals.sort_by(|a, b| b.total.cmp(&a.total));

    tracing::debug!(
        transactions = transactions.len(),
        categories = totals.len(),
        "summarized expenses by category"
    );

    totals
}

/// Sum of all category totals
pub fn grand_total(totals: &[CategoryTotal]) -> Money {
    totals.iter().map(|t| t.total).sum()
}
