//! Builders shared by the insight tests

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{CategoryId, GroceryItem, Money, Quality, Transaction};

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
}

/// A non-essential item without weight
pub(crate) fn item(name: &str, units: i64) -> GroceryItem {
    GroceryItem::new(name, Money::from_units(units))
}

pub(crate) fn essential(name: &str, units: i64, quality: Quality) -> GroceryItem {
    item(name, units).essential().with_quality(quality)
}

/// A market purchase at `supplier`
pub(crate) fn market(date: NaiveDate, supplier: &str, items: Vec<GroceryItem>) -> Transaction {
    Transaction::grocery(date, CategoryId::market(), Some(supplier), items)
}
