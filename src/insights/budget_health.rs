//! Budget health classification
//!
//! Compares the month's expenses to its income and picks the banner the
//! dashboard should show. The classification is recomputed from scratch on
//! every call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Money, Month, Transaction, TransactionKind};

/// Expense ratio from which spending is considered critical
pub const CRITICAL_RATIO: f64 = 1.0;

/// Expense ratio from which spending triggers a warning
pub const WARNING_RATIO: f64 = 0.9;

/// Expense ratio below which spending is praised
pub const SAFE_RATIO: f64 = 0.7;

/// Alert tier for the month's spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetAlertLevel {
    /// Spending meets or exceeds income
    Critical,
    /// Spending is at 90% of income or more
    Warning,
    /// Spending is comfortably below income
    Safe,
    /// Nothing to show
    None,
}

impl BudgetAlertLevel {
    /// Whether the presentation layer should show a message at all
    pub fn is_shown(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for BudgetAlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::Warning => write!(f, "WARNING"),
            Self::Safe => write!(f, "SAFE"),
            Self::None => write!(f, "NONE"),
        }
    }
}

/// Classify a period's expense-to-income ratio
///
/// A period without income never raises an alert.
pub fn classify_budget(total_income: Money, total_expense: Money) -> BudgetAlertLevel {
    if total_income.is_zero() {
        return BudgetAlertLevel::None;
    }

    let ratio = total_expense.cents() as f64 / total_income.cents() as f64;

    if ratio >= CRITICAL_RATIO {
        BudgetAlertLevel::Critical
    } else if ratio >= WARNING_RATIO {
        BudgetAlertLevel::Warning
    } else if ratio < SAFE_RATIO && total_expense.is_positive() {
        BudgetAlertLevel::Safe
    } else {
        BudgetAlertLevel::None
    }
}

/// Income and expense booked in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyTotals {
    /// Empty totals for a month
    pub fn empty(month: Month) -> Self {
        Self {
            month,
            income: Money::zero(),
            expense: Money::zero(),
        }
    }

    /// Sum the transaction amounts of one month by kind
    pub fn for_month(transactions: &[Transaction], month: Month) -> Self {
        let mut totals = Self::empty(month);
        for txn in transactions.iter().filter(|t| month.contains(t.date)) {
            totals.record(txn);
        }
        totals
    }

    /// Add a transaction's amount to the matching side
    pub fn record(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => self.income += txn.amount,
            TransactionKind::Expense => self.expense += txn.amount,
        }
    }

    /// Income minus expense
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }

    /// Alert tier for these totals
    pub fn alert_level(&self) -> BudgetAlertLevel {
        classify_budget(self.income, self.expense)
    }
}
