//! Strongly-typed ID wrappers for all entity types
//!
//! Identifiers are opaque strings: records coming from older backups carry
//! timestamp ids ("1712345678901") or slugs ("exp_market"), while records
//! created here get a random UUID. Newtypes keep the kinds from mixing.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an existing identifier
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(TransactionId);
define_id!(GroceryItemId);
define_id!(CategoryId);
define_id!(GoalId);

/// Open-air market purchases (vegetables, fruit, meat, herbs)
pub const MARKET_CATEGORY: &str = "exp_market";

/// Supermarket purchases (pantry, cleaning, hygiene)
pub const SUPERMARKET_CATEGORY: &str = "exp_groceries";

impl CategoryId {
    /// The open-air market category
    pub fn market() -> Self {
        Self::from_raw(MARKET_CATEGORY)
    }

    /// The supermarket category
    pub fn supermarket() -> Self {
        Self::from_raw(SUPERMARKET_CATEGORY)
    }

    /// Whether this category carries grocery line items
    pub fn is_grocery_relevant(&self) -> bool {
        self.0 == MARKET_CATEGORY || self.0 == SUPERMARKET_CATEGORY
    }
}
