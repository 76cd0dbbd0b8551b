//! Sahla Budget - shopping and budget insights for a household
//!
//! This library turns a household's transaction history (incomes, expenses,
//! and itemized market and supermarket purchases) into the views a family
//! budgeting app shows: monthly consumption, supplier price comparison,
//! best deals, restock reminders, budget alerts and dashboard summaries.
//!
//! # Architecture
//!
//! - `models`: transactions, grocery items, categories, goals, money
//! - `insights`: the pure aggregation engine
//! - `config`: path resolution and user settings
//! - `storage`: JSON snapshot loading and atomic writes
//! - `export`: JSON, YAML and CSV reports
//! - `display`: terminal formatting
//! - `cli`: command handlers for the `sahla` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sahla_budget::insights::resolve_best_deals;
//! use sahla_budget::models::{CategoryId, GroceryItem, Money, Quality, Transaction};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let tomatoes = GroceryItem::new("Tomates", Money::from_units(12))
//!     .essential()
//!     .with_quality(Quality::Good);
//! let txn = Transaction::grocery(date, CategoryId::market(), Some("Souk"), vec![tomatoes]);
//!
//! let deals = resolve_best_deals(&[txn]);
//! assert_eq!(deals[0].best_supplier, "Souk");
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod storage;

pub use error::{SahlaError, SahlaResult};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, once
///
/// Logs go to stderr. The default filter is `sahla_budget=info`; `RUST_LOG`
/// overrides it.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sahla_budget=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
