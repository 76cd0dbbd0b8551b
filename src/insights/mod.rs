//! Shopping and budget insights
//!
//! Every view is a pure function of the transaction list plus, where the
//! result depends on time, an explicit reference date or "now". Nothing in
//! here reads the clock, touches the filesystem or keeps state between
//! calls; calling a function twice with the same input gives the same
//! output.
//!
//! - [`consumption`]: kilograms bought per item this month
//! - [`suppliers`]: average price per kilogram per item and supplier
//! - [`best_deal`]: the purchase worth repeating for each essential item
//! - [`restock`]: essential items not bought recently
//! - [`budget_health`]: expense-to-income alert tier
//! - [`category_summary`], [`monthly`], [`history`]: dashboard views
//! - [`advice`]: summary handed to an external advice generator

pub mod advice;
pub mod best_deal;
pub mod budget_health;
pub mod category_summary;
pub mod consumption;
pub mod guide;
pub mod history;
pub mod monthly;
pub mod normalize;
pub mod restock;
pub mod suppliers;

#[cfg(test)]
pub(crate) mod fixtures;

pub use advice::{request_advice, AdviceGenerator, AdviceSummary, DEFAULT_ADVICE_LIMIT};
pub use best_deal::{resolve_best_deals, should_replace, BestDealEntry};
pub use budget_health::{classify_budget, BudgetAlertLevel, MonthlyTotals};
pub use category_summary::{grand_total, summarize_by_category, CategoryTotal};
pub use consumption::{compute_consumption, ConsumptionEntry};
pub use guide::{MarketReport, ShoppingGuide};
pub use history::TransactionFilter;
pub use monthly::{monthly_flows, DEFAULT_CHART_MONTHS};
pub use normalize::{display_name, normalize_name, UNKNOWN_SUPPLIER};
pub use restock::{suggest_restocks, suggest_restocks_within, RestockSuggestion, FRESHNESS_WINDOW_DAYS};
pub use suppliers::{compare_suppliers, SupplierComparison, SupplierPriceEntry, SupplierTotals};
