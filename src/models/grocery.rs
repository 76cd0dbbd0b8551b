//! Grocery line items
//!
//! Market and supermarket transactions carry the individual items bought,
//! each with its own price, optional weight and a quality rating for that
//! particular purchase.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GroceryItemId;
use super::money::Money;

/// Quality of a single purchase
///
/// Ordered `Bad < Average < Good`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Quality {
    Bad,
    #[default]
    Average,
    Good,
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bad => write!(f, "Bad"),
            Self::Average => write!(f, "Average"),
            Self::Good => write!(f, "Good"),
        }
    }
}

/// One item bought as part of a grocery transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Unique identifier within the parent transaction
    #[serde(default)]
    pub id: GroceryItemId,

    /// Free-text name as typed by the user
    pub name: String,

    /// Price paid for this line
    pub price: Money,

    /// Weight in kilograms, when the item was weighed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Tracked for restocking and best-price purposes
    #[serde(default)]
    pub is_essential: bool,

    #[serde(default)]
    pub quality: Quality,
}

impl GroceryItem {
    /// Create a new item with no weight, not essential, average quality
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            id: GroceryItemId::new(),
            name: name.into(),
            price,
            weight: None,
            is_essential: false,
            quality: Quality::default(),
        }
    }

    /// Set the weight in kilograms
    pub fn weighing(mut self, kg: f64) -> Self {
        self.weight = Some(kg);
        self
    }

    /// Mark the item as essential
    pub fn essential(mut self) -> Self {
        self.is_essential = true;
        self
    }

    /// Set the quality rating
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// The weight, only when it is a usable positive number
    pub fn positive_weight(&self) -> Option<f64> {
        self.weight.filter(|w| w.is_finite() && *w > 0.0)
    }
}
