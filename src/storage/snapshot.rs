//! The household data snapshot
//!
//! A snapshot is the backup document the app exports: every transaction
//! (newest first), the savings goals and the user-defined categories. The
//! insight views only ever read it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::file_io::read_json;
use crate::error::SahlaError;
use crate::models::{default_categories, Category, SavingsGoal, Transaction};

/// Read access to the household records
pub trait TransactionSource {
    /// All transactions, newest first
    fn transactions(&self) -> &[Transaction];

    fn goals(&self) -> &[SavingsGoal];

    /// Built-in plus user-defined categories
    fn categories(&self) -> Vec<Category>;
}

/// A record that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// "transaction", "goal" or "category"
    pub record: &'static str,
    pub id: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(record: &'static str, id: &str, message: impl ToString) -> Self {
        Self {
            record,
            id: id.to_string(),
            message: message.to_string(),
        }
    }
}

/// A backup of the household records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub goals: Vec<SavingsGoal>,

    #[serde(default)]
    pub custom_categories: Vec<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Load a snapshot; a missing file is an empty household
    ///
    /// Records that fail validation are kept and reported at warn level.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SahlaError> {
        let path = path.as_ref();
        let snapshot: Snapshot = read_json(path)?;

        let issues = snapshot.validation_issues();
        for issue in &issues {
            tracing::warn!(
                record = issue.record,
                id = %issue.id,
                issue = %issue.message,
                "record failed validation"
            );
        }

        tracing::debug!(
            path = %path.display(),
            transactions = snapshot.transactions.len(),
            goals = snapshot.goals.len(),
            custom_categories = snapshot.custom_categories.len(),
            invalid = issues.len(),
            "loaded snapshot"
        );

        Ok(snapshot)
    }

    /// Transactions, goals and custom categories whose contents are inconsistent
    pub fn validation_issues(&self) -> Vec<ValidationIssue> {
        let transactions = self.transactions.iter().filter_map(|t| {
            t.validate()
                .err()
                .map(|e| ValidationIssue::new("transaction", t.id.as_str(), e))
        });
        let goals = self.goals.iter().filter_map(|g| {
            g.validate()
                .err()
                .map(|e| ValidationIssue::new("goal", g.id.as_str(), e))
        });
        let categories = self.custom_categories.iter().filter_map(|c| {
            c.validate()
                .err()
                .map(|e| ValidationIssue::new("category", c.id.as_str(), e))
        });

        transactions.chain(goals).chain(categories).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.goals.is_empty() && self.custom_categories.is_empty()
    }

    /// Look up a savings goal by id or case-insensitive name
    pub fn find_goal(&self, key: &str) -> Result<&SavingsGoal, SahlaError> {
        self.goals
            .iter()
            .find(|g| g.id.as_str() == key)
            .or_else(|| {
                let wanted = key.trim().to_lowercase();
                self.goals.iter().find(|g| g.name.to_lowercase() == wanted)
            })
            .ok_or_else(|| SahlaError::goal_not_found(key))
    }
}

impl TransactionSource for Snapshot {
    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    fn categories(&self) -> Vec<Category> {
        let builtin = default_categories();
        let custom: Vec<Category> = self
            .custom_categories
            .iter()
            .filter(|c| builtin.iter().all(|b| b.id != c.id))
            .cloned()
            .collect();
        builtin.into_iter().chain(custom).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::TimeZone;
    use tempfile::TempDir;

    const BACKUP: &str = r#"{
        "transactions": [
            {
                "id": "1718000000000",
                "date": "2025-03-18",
                "amount": 45.5,
                "type": "EXPENSE",
                "categoryId": "exp_market",
                "memberId": "mem_family",
                "description": "Souk du samedi",
                "isRecurring": false,
                "supplier": "Souk Had",
                "groceryItems": [
                    {"id": "g1", "name": "Tomates", "price": 12, "weight": 2, "isEssential": true, "quality": "GOOD"},
                    {"id": "g2", "name": "Menthe", "price": 33.5, "isEssential": false, "quality": "AVERAGE"}
                ]
            },
            {
                "id": "1717000000000",
                "date": "2025-03-01",
                "amount": 8000,
                "type": "INCOME",
                "categoryId": "inc_salary",
                "description": "",
                "isRecurring": true
            }
        ],
        "goals": [
            {"id": "goal1", "name": "Aïd al-Adha", "targetAmount": 4000, "currentAmount": 1500}
        ],
        "customCategories": [
            {"id": "custom_1", "name": "Animaux", "type": "EXPENSE", "icon": "Star"}
        ],
        "exportedAt": "2025-03-20T10:00:00.000Z"
    }"#;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot = Snapshot::load(temp_dir.path().join("snapshot.json")).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.categories().len(), default_categories().len());
    }

    #[test]
    fn test_reads_backup_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        std::fs::write(&path, BACKUP).unwrap();

        let snapshot = Snapshot::load(&path).unwrap();
        assert_eq!(snapshot.transactions.len(), 2);

        let market = &snapshot.transactions[0];
        assert_eq!(market.amount, Money::from_cents(4550));
        assert_eq!(market.supplier_name(), Some("Souk Had"));
        assert_eq!(market.grocery_items.len(), 2);
        assert_eq!(snapshot.transactions[1].kind, TransactionKind::Income);

        assert_eq!(snapshot.goals[0].current_amount, Money::from_units(1500));
        assert!(snapshot.validation_issues().is_empty());
        assert_eq!(
            snapshot.exported_at,
            Some(Utc.with_ymd_and_hms(2025, 3, 20, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_categories_include_custom() {
        let snapshot: Snapshot = serde_json::from_str(BACKUP).unwrap();
        let categories = snapshot.categories();
        assert_eq!(categories.len(), default_categories().len() + 1);
        assert!(categories.iter().any(|c| c.name == "Animaux"));
    }

    #[test]
    fn test_find_goal() {
        let snapshot: Snapshot = serde_json::from_str(BACKUP).unwrap();
        assert_eq!(snapshot.find_goal("goal1").unwrap().name, "Aïd al-Adha");
        assert_eq!(snapshot.find_goal("aïd al-adha").unwrap().id.as_str(), "goal1");
        assert_eq!(snapshot.find_goal("AÏD AL-ADHA ").unwrap().id.as_str(), "goal1");
        assert!(snapshot.find_goal("voiture").unwrap_err().is_not_found());
    }

    #[test]
    fn test_invalid_records_are_kept() {
        let mut snapshot = Snapshot::default();
        let mut txn = Transaction::expense(
            chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            Money::from_units(10),
            "exp_rent",
        );
        txn.amount = Money::from_units(-10);
        snapshot.transactions.push(txn);

        assert_eq!(snapshot.validation_issues().len(), 1);
        assert_eq!(snapshot.transactions().len(), 1);
    }

    #[test]
    fn test_goal_and_category_issues() {
        let mut snapshot: Snapshot = serde_json::from_str(BACKUP).unwrap();
        snapshot.goals[0].target_amount = Money::zero();
        snapshot.custom_categories[0].name = "  ".to_string();

        let issues = snapshot.validation_issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].record, "goal");
        assert_eq!(issues[0].id, "goal1");
        assert_eq!(issues[1].record, "category");
        assert_eq!(issues[1].message, "Category name cannot be empty");
        assert_eq!(snapshot.goals.len(), 1);
    }
}
