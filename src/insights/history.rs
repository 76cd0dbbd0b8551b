//! Transaction history filtering

use serde::{Deserialize, Serialize};

use crate::models::{CategoryId, MemberId, Transaction};

/// Member and category filter for the history view
///
/// An unset field matches every transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub member: Option<MemberId>,
    pub category: Option<CategoryId>,
}

impl TransactionFilter {
    /// A filter matching everything
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_member(mut self, member: MemberId) -> Self {
        self.member = Some(member);
        self
    }

    pub fn for_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether a transaction passes the filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        let member_ok = self.member.map_or(true, |m| txn.member_id == Some(m));
        let category_ok = self
            .category
            .as_ref()
            .map_or(true, |c| &txn.category_id == c);
        member_ok && category_ok
    }

    /// Matching transactions, in input order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}
