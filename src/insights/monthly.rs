//! Income and expense per month, for the trend chart

use std::collections::BTreeMap;

use super::budget_health::MonthlyTotals;
use crate::models::{Month, Transaction};

/// Default number of months shown on the trend chart
pub const DEFAULT_CHART_MONTHS: usize = 6;

/// Totals for the most recent `limit` months that have transactions,
/// oldest first
///
/// Months without any transaction are not filled in.
pub fn monthly_flows(transactions: &[Transaction], limit: usize) -> Vec<MonthlyTotals> {
    let mut by_month: BTreeMap<Month, MonthlyTotals> = BTreeMap::new();

    for txn in transactions {
        let month = Month::containing(txn.date);
        by_month
            .entry(month)
            .or_insert_with(|| MonthlyTotals::empty(month))
            .record(txn);
    }

    let skip = by_month.len().saturating_sub(limit);
    let flows: Vec<MonthlyTotals> = by_month.into_values().skip(skip).collect();

    tracing::debug!(
        transactions = transactions.len(),
        months = flows.len(),
        "computed monthly flows"
    );

    flows
}
