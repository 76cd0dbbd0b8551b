//! Display formatting for terminal output

pub mod insights;
pub mod report;

pub use insights::{
    alert_message, format_best_deals, format_budget_health, format_category_totals,
    format_consumption, format_goal_remaining, format_goals, format_history,
    format_monthly_flows, format_restock, format_supplier_comparison,
};
