//! Category model and the built-in category catalog
//!
//! Categories are flat: each one is either an income or an expense
//! category. The built-in catalog uses stable slug ids (`exp_market`,
//! `inc_salary`, ...); user-defined categories are stored alongside it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, MARKET_CATEGORY, SUPERMARKET_CATEGORY};
use super::transaction::TransactionKind;

/// An income or expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Icon name used by the presentation layer
    #[serde(default)]
    pub icon: String,

    /// Fixed monthly or annual charge (rent, school, Eid...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fixed: Option<bool>,
}

impl Category {
    /// Create a new user-defined category
    pub fn new(name: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            id: CategoryId::from_raw(format!("custom_{}", uuid::Uuid::new_v4().simple())),
            name: name.into(),
            kind,
            icon: "Star".to_string(),
            is_fixed: None,
        }
    }

    /// Whether this category is a fixed charge
    pub fn is_fixed(&self) -> bool {
        self.is_fixed.unwrap_or(false)
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Built-in category row: id, name, kind, icon, fixed
type CatalogRow = (&'static str, &'static str, TransactionKind, &'static str, bool);

const CATALOG: &[CatalogRow] = &[
    ("inc_salary", "Salaire Mensuel (Fixe)", TransactionKind::Income, "Briefcase", true),
    ("inc_freelance", "Missions / Variable", TransactionKind::Income, "DollarSign", false),
    ("exp_phone", "Recharge Téléphone", TransactionKind::Expense, "Smartphone", true),
    ("exp_utilities", "Eau & Électricité", TransactionKind::Expense, "Zap", true),
    ("exp_internet", "Internet", TransactionKind::Expense, "Wifi", true),
    ("exp_school", "Scolarité", TransactionKind::Expense, "GraduationCap", true),
    ("exp_rent", "Loyer / Logement", TransactionKind::Expense, "Home", true),
    (MARKET_CATEGORY, "Marché & Légumes", TransactionKind::Expense, "Carrot", false),
    (SUPERMARKET_CATEGORY, "Alimentation (Supermarché)", TransactionKind::Expense, "ShoppingBag", false),
    ("exp_smoking", "Tabac & Perso", TransactionKind::Expense, "Flame", false),
    ("exp_health", "Santé & Couches (Bébé)", TransactionKind::Expense, "Baby", false),
    ("exp_transport", "Transport / Carburant", TransactionKind::Expense, "Car", false),
    ("exp_leisure", "Loisirs / Café", TransactionKind::Expense, "Coffee", false),
    ("exp_clothing", "Vêtements", TransactionKind::Expense, "Shirt", false),
    ("exp_care", "Soins Personnels", TransactionKind::Expense, "Scissors", false),
    ("exp_home", "Maison & Équipement", TransactionKind::Expense, "Armchair", false),
    ("exp_gifts", "Cadeaux / Invités", TransactionKind::Expense, "Gift", false),
    ("exp_eid_fitr", "Aïd al-Fitr", TransactionKind::Expense, "Moon", true),
    ("exp_eid_adha", "Aïd al-Adha (Mouton)", TransactionKind::Expense, "Moon", true),
    ("exp_ramadan", "Ramadan", TransactionKind::Expense, "Moon", true),
    ("exp_school_start", "Rentrée Scolaire", TransactionKind::Expense, "PenTool", true),
    ("exp_car_maint", "Entretien Voiture", TransactionKind::Expense, "Car", true),
    ("exp_vacation", "Voyages & Vacances", TransactionKind::Expense, "Plane", true),
    ("exp_emergency", "Imprévus", TransactionKind::Expense, "AlertCircle", false),
];

/// The built-in income and expense categories
pub fn default_categories() -> Vec<Category> {
    CATALOG
        .iter()
        .map(|(id, name, kind, icon, fixed)| Category {
            id: CategoryId::from_raw(*id),
            name: (*name).to_string(),
            kind: *kind,
            icon: (*icon).to_string(),
            is_fixed: Some(*fixed),
        })
        .collect()
}

/// Find a category by id
pub fn find_category<'a>(categories: &'a [Category], id: &CategoryId) -> Option<&'a Category> {
    categories.iter().find(|c| &c.id == id)
}

/// Name of a category, falling back to its raw id when unknown
pub fn category_label(categories: &[Category], id: &CategoryId) -> String {
    find_category(categories, id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
