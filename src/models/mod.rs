//! Core data models for Sahla Budget
//!
//! This module contains the records the insight engine consumes:
//! transactions with their grocery line items, categories, savings goals,
//! and the money and calendar-month value types.

pub mod category;
pub mod goal;
pub mod grocery;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{category_label, default_categories, find_category, Category};
pub use goal::SavingsGoal;
pub use grocery::{GroceryItem, Quality};
pub use ids::{CategoryId, GoalId, GroceryItemId, TransactionId};
pub use money::Money;
pub use period::Month;
pub use transaction::{MemberId, Transaction, TransactionKind};
