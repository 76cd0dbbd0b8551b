//! A small household shared by the export tests

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::models::{CategoryId, GroceryItem, Money, Quality, SavingsGoal, Transaction};
use crate::storage::Snapshot;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

pub(crate) fn now() -> NaiveDateTime {
    date(20).and_hms_opt(9, 0, 0).unwrap()
}

pub(crate) fn exported_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 20, 9, 0, 0).unwrap()
}

/// March 2025: salary, rent, a supermarket run and a market visit
pub(crate) fn sample_snapshot() -> Snapshot {
    let oil = GroceryItem::new("Huile", Money::from_units(25))
        .weighing(1.0)
        .essential()
        .with_quality(Quality::Average);
    let tomatoes = GroceryItem::new("Tomates", Money::from_units(12))
        .weighing(2.0)
        .essential()
        .with_quality(Quality::Good);
    let mint = GroceryItem::new("Menthe", Money::from_units(3));

    let mut savings = SavingsGoal::new("Aïd al-Adha", Money::from_units(4000));
    savings.current_amount = Money::from_units(1500);

    Snapshot {
        transactions: vec![
            Transaction::grocery(date(18), CategoryId::market(), Some("Souk"), vec![tomatoes, mint]),
            Transaction::grocery(date(5), CategoryId::supermarket(), Some("Marjane"), vec![oil]),
            Transaction::expense(date(2), Money::from_units(3000), "exp_rent"),
            Transaction::income(date(1), Money::from_units(8000), "inc_salary"),
        ],
        goals: vec![savings],
        custom_categories: Vec::new(),
        exported_at: None,
    }
}
