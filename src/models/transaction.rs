//! Transaction model
//!
//! A transaction is an income or expense booked against a category. Market
//! and supermarket expenses may carry the individual grocery items bought
//! and the supplier they were bought from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::grocery::GroceryItem;
use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// The household member an expense is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberId {
    #[serde(rename = "mem_father")]
    Father,
    #[serde(rename = "mem_mother")]
    Mother,
    #[serde(rename = "mem_daughter")]
    Daughter,
    #[serde(rename = "mem_baby")]
    Baby,
    #[serde(rename = "mem_family")]
    Family,
}

impl MemberId {
    /// All members, family-wide first
    pub const ALL: [MemberId; 5] = [
        Self::Family,
        Self::Father,
        Self::Mother,
        Self::Daughter,
        Self::Baby,
    ];

    /// The stored identifier ("mem_father", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Father => "mem_father",
            Self::Mother => "mem_mother",
            Self::Daughter => "mem_daughter",
            Self::Baby => "mem_baby",
            Self::Family => "mem_family",
        }
    }

    /// Parse a stored identifier or a bare role name ("father")
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        let key = key.strip_prefix("mem_").unwrap_or(&key);
        match key {
            "father" => Some(Self::Father),
            "mother" => Some(Self::Mother),
            "daughter" => Some(Self::Daughter),
            "baby" => Some(Self::Baby),
            "family" => Some(Self::Family),
            _ => None,
        }
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Amount, always non-negative; direction comes from `kind`
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub category_id: CategoryId,

    /// Who this expense is for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberId>,

    /// Free-text note
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub is_recurring: bool,

    /// Explicit override of the category's fixed flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fixed: Option<bool>,

    /// Shop or market stall name (grocery transactions only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    /// Line items (grocery transactions only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grocery_items: Vec<GroceryItem>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        amount: Money,
        kind: TransactionKind,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            amount,
            kind,
            category_id: category_id.into(),
            member_id: None,
            description: String::new(),
            is_recurring: false,
            is_fixed: None,
            supplier: None,
            grocery_items: Vec::new(),
        }
    }

    /// Create an income transaction
    pub fn income(date: NaiveDate, amount: Money, category_id: impl Into<CategoryId>) -> Self {
        Self::new(date, amount, TransactionKind::Income, category_id)
    }

    /// Create an expense transaction
    pub fn expense(date: NaiveDate, amount: Money, category_id: impl Into<CategoryId>) -> Self {
        Self::new(date, amount, TransactionKind::Expense, category_id)
    }

    /// Create a grocery expense whose amount is the sum of its items
    pub fn grocery(
        date: NaiveDate,
        category_id: impl Into<CategoryId>,
        supplier: Option<&str>,
        items: Vec<GroceryItem>,
    ) -> Self {
        let amount = items.iter().map(|i| i.price).sum();
        let mut txn = Self::expense(date, amount, category_id);
        txn.supplier = supplier.map(str::to_string);
        txn.grocery_items = items;
        txn
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Booked under the market or supermarket category
    pub fn is_grocery_relevant(&self) -> bool {
        self.category_id.is_grocery_relevant()
    }

    /// Check if this transaction carries line items
    pub fn has_grocery_items(&self) -> bool {
        !self.grocery_items.is_empty()
    }

    /// Line items of a grocery-relevant transaction, empty otherwise
    pub fn grocery_lines(&self) -> &[GroceryItem] {
        if self.is_grocery_relevant() {
            &self.grocery_items
        } else {
            &[]
        }
    }

    /// The supplier name, treating an empty string as absent
    pub fn supplier_name(&self) -> Option<&str> {
        self.supplier.as_deref().filter(|s| !s.is_empty())
    }

    /// Sum of the line item prices
    pub fn grocery_total(&self) -> Money {
        self.grocery_items.iter().map(|i| i.price).sum()
    }

    /// Validate the record before it is handed to the engine
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        for item in &self.grocery_items {
            if item.price.is_negative() {
                return Err(TransactionValidationError::NegativePrice {
                    item: item.name.clone(),
                });
            }
            if let Some(weight) = item.weight {
                if !(weight.is_finite() && weight > 0.0) {
                    return Err(TransactionValidationError::InvalidWeight {
                        item: item.name.clone(),
                        weight,
                    });
                }
            }
        }

        if self.has_grocery_items() {
            let items_total = self.grocery_total();
            if items_total != self.amount {
                return Err(TransactionValidationError::ItemsMismatch {
                    transaction_amount: self.amount,
                    items_total,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_expense() { "-" } else { "+" };
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.category_id,
            sign,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    NegativePrice { item: String },
    InvalidWeight { item: String, weight: f64 },
    ItemsMismatch {
        transaction_amount: Money,
        items_total: Money,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => write!(f, "Amount cannot be negative: {}", amount),
            Self::NegativePrice { item } => write!(f, "Price of '{}' cannot be negative", item),
            Self::InvalidWeight { item, weight } => {
                write!(f, "Weight of '{}' must be positive, got {}", item, weight)
            }
            Self::ItemsMismatch {
                transaction_amount,
                items_total,
            } => write!(
                f,
                "Item totals ({}) do not match transaction amount ({})",
                items_total, transaction_amount
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quality;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::expense(date(), Money::from_units(50), "exp_rent");
        assert!(txn.is_expense());
        assert!(!txn.is_grocery_relevant());
        assert!(txn.grocery_lines().is_empty());
    }

    #[test]
    fn test_grocery_transaction_amount_is_item_sum() {
        let txn = Transaction::grocery(
            date(),
            CategoryId::market(),
            Some("Souk"),
            vec![
                GroceryItem::new("Tomates", Money::from_cents(1250)),
                GroceryItem::new("Oignons", Money::from_units(6)),
            ],
        );
        assert_eq!(txn.amount.cents(), 1850);
        assert_eq!(txn.grocery_lines().len(), 2);
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_items_outside_grocery_categories_are_ignored() {
        let mut txn = Transaction::expense(date(), Money::from_units(5), "exp_home");
        txn.grocery_items
            .push(GroceryItem::new("Ampoule", Money::from_units(5)));
        assert!(txn.has_grocery_items());
        assert!(txn.grocery_lines().is_empty());
    }

    #[test]
    fn test_empty_supplier_is_absent() {
        let mut txn = Transaction::grocery(date(), CategoryId::market(), Some(""), vec![]);
        assert_eq!(txn.supplier_name(), None);
        txn.supplier = Some("Marché".into());
        assert_eq!(txn.supplier_name(), Some("Marché"));
    }

    #[test]
    fn test_validation_mismatch() {
        let mut txn = Transaction::grocery(
            date(),
            CategoryId::supermarket(),
            None,
            vec![GroceryItem::new("Lait", Money::from_units(7))],
        );
        txn.amount = Money::from_units(10);
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::ItemsMismatch { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_zero_weight() {
        let txn = Transaction::grocery(
            date(),
            CategoryId::market(),
            None,
            vec![GroceryItem::new("Menthe", Money::from_units(2)).weighing(0.0)],
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_member_parse() {
        assert_eq!(MemberId::parse("mem_baby"), Some(MemberId::Baby));
        assert_eq!(MemberId::parse("Father"), Some(MemberId::Father));
        assert_eq!(MemberId::parse("uncle"), None);
    }

    #[test]
    fn test_deserialize_backup_record() {
        let json = r#"{
            "id": "1712345678901",
            "date": "2025-03-02",
            "amount": 42.5,
            "type": "EXPENSE",
            "categoryId": "exp_market",
            "memberId": "mem_family",
            "description": "",
            "supplier": "Souk Had",
            "groceryItems": [
                {"id": "1", "name": " Tomates ", "price": 30, "weight": 3, "isEssential": true, "quality": "GOOD"},
                {"id": "2", "name": "Menthe", "price": 12.5, "isEssential": false, "quality": "AVERAGE"}
            ]
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.id.as_str(), "1712345678901");
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.member_id, Some(MemberId::Family));
        assert_eq!(txn.grocery_items.len(), 2);
        assert_eq!(txn.grocery_items[0].quality, Quality::Good);
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::income(date(), Money::from_units(8000), "inc_salary");
        assert_eq!(format!("{}", txn), "2025-01-15 inc_salary +8000.00");
    }
}
