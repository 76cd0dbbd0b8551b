//! JSON export of the insight views
//!
//! An [`InsightExport`] captures every view for one month at one point in
//! time, so a report can be archived or shared without the raw snapshot.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::config::Settings;
use crate::error::{SahlaError, SahlaResult};
use crate::insights::{
    monthly_flows, summarize_by_category, BestDealEntry, BudgetAlertLevel, CategoryTotal,
    ConsumptionEntry, MarketReport, MonthlyTotals, RestockSuggestion, ShoppingGuide,
    SupplierPriceEntry,
};
use crate::models::{Month, SavingsGoal, Transaction};
use crate::storage::TransactionSource;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Every insight view for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,

    /// Month the month-scoped views cover
    pub month: Month,
    pub currency: String,

    pub budget: MonthlyTotals,
    pub alert_level: BudgetAlertLevel,
    pub best_deals: Vec<BestDealEntry>,
    pub restock: Vec<RestockSuggestion>,
    pub consumption: Vec<ConsumptionEntry>,
    pub supplier_prices: Vec<SupplierPriceEntry>,
    pub category_totals: Vec<CategoryTotal>,
    pub monthly_flows: Vec<MonthlyTotals>,
    pub goals: Vec<SavingsGoal>,
}

impl InsightExport {
    /// Compute every view from a record source
    ///
    /// `now` drives the restock view; `exported_at` only stamps the document.
    pub fn build<S: TransactionSource + ?Sized>(
        source: &S,
        settings: &Settings,
        month: Month,
        now: NaiveDateTime,
        exported_at: DateTime<Utc>,
    ) -> Self {
        let transactions = source.transactions();
        let in_month: Vec<Transaction> = transactions
            .iter()
            .filter(|t| month.contains(t.date))
            .cloned()
            .collect();

        let budget = MonthlyTotals::for_month(transactions, month);
        let guide = ShoppingGuide::build(transactions, now, settings.restock_window_days);
        let market = MarketReport::build(transactions, month.start_date());

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            month,
            currency: settings.currency_symbol.clone(),
            alert_level: budget.alert_level(),
            budget,
            best_deals: guide.best_deals,
            restock: guide.restock,
            consumption: market.consumption,
            supplier_prices: market.suppliers.entries(),
            category_totals: summarize_by_category(&in_month),
            monthly_flows: monthly_flows(transactions, settings.monthly_chart_months),
            goals: source.goals().to_vec(),
        }
    }
}

/// Write the export as JSON
pub fn export_json<W: Write>(export: &InsightExport, writer: &mut W, pretty: bool) -> SahlaResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    result.map_err(|e| SahlaError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| SahlaError::Export(e.to_string()))?;
    Ok(())
}
