//! Terminal formatting for the insight views

use crate::insights::{
    grand_total, BestDealEntry, BudgetAlertLevel, CategoryTotal, ConsumptionEntry, MonthlyTotals,
    RestockSuggestion, SupplierComparison,
};
use crate::models::{category_label, Category, Money, SavingsGoal, Transaction};

use super::report::{format_bar, format_percentage, render_table, Align};

const BAR_WIDTH: usize = 20;

pub fn format_consumption(entries: &[ConsumptionEntry]) -> String {
    if entries.is_empty() {
        return "No weighed purchases this month.".to_string();
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                crate::insights::display_name(&e.item_name),
                format!("{:.2}", e.total_weight_kg),
            ]
        })
        .collect();

    render_table(&[("Item", Align::Left), ("Kg", Align::Right)], &rows)
}

pub fn format_supplier_comparison(comparison: &SupplierComparison, symbol: &str) -> String {
    let entries = comparison.entries();
    if entries.is_empty() {
        return "No weighed purchases with a supplier yet.".to_string();
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            let cheapest = comparison
                .cheapest_supplier(&e.item_name)
                .map(|c| c.supplier_name == e.supplier_name)
                .unwrap_or(false);
            vec![
                crate::insights::display_name(&e.item_name),
                e.supplier_name.clone(),
                format!("{:.2} {}/kg", e.average_unit_price, symbol),
                if cheapest { "*".to_string() } else { String::new() },
            ]
        })
        .collect();

    render_table(
        &[
            ("Item", Align::Left),
            ("Supplier", Align::Left),
            ("Avg price", Align::Right),
            ("", Align::Left),
        ],
        &rows,
    )
}

pub fn format_best_deals(deals: &[BestDealEntry], symbol: &str) -> String {
    if deals.is_empty() {
        return "No essential items recorded yet.".to_string();
    }

    let rows: Vec<Vec<String>> = deals
        .iter()
        .map(|d| {
            vec![
                d.display_name(),
                d.best_supplier.clone(),
                d.best_price.format_with_symbol(symbol),
                d.best_quality.to_string(),
                d.last_purchase_date.to_string(),
            ]
        })
        .collect();

    render_table(
        &[
            ("Item", Align::Left),
            ("Supplier", Align::Left),
            ("Price", Align::Right),
            ("Quality", Align::Left),
            ("Bought", Align::Left),
        ],
        &rows,
    )
}

pub fn format_restock(suggestions: &[RestockSuggestion]) -> String {
    if suggestions.is_empty() {
        return "Nothing to restock.".to_string();
    }

    let rows: Vec<Vec<String>> = suggestions
        .iter()
        .map(|s| vec![s.display_name(), format!("{} days", s.days_since_last_purchase)])
        .collect();

    render_table(&[("Item", Align::Left), ("Last bought", Align::Right)], &rows)
}

/// Banner text for an alert tier, empty for [`BudgetAlertLevel::None`]
pub fn alert_message(level: BudgetAlertLevel) -> &'static str {
    match level {
        BudgetAlertLevel::Critical => "Budget exceeded: expenses have reached this month's income.",
        BudgetAlertLevel::Warning => "Careful: 90% of this month's income is already spent.",
        BudgetAlertLevel::Safe => "Well done: spending is comfortably below income.",
        BudgetAlertLevel::None => "",
    }
}

pub fn format_budget_health(totals: &MonthlyTotals, symbol: &str) -> String {
    let level = totals.alert_level();
    let mut output = String::new();

    output.push_str(&format!("Month:    {}\n", totals.month));
    output.push_str(&format!("Income:   {}\n", totals.income.format_with_symbol(symbol)));
    output.push_str(&format!("Expenses: {}\n", totals.expense.format_with_symbol(symbol)));
    output.push_str(&format!("Balance:  {}\n", totals.balance().format_with_symbol(symbol)));
    output.push_str(&format!("Alert:    {}\n", level));

    if level.is_shown() {
        output.push('\n');
        output.push_str(alert_message(level));
        output.push('\n');
    }

    output
}

pub fn format_category_totals(totals: &[CategoryTotal], categories: &[Category], symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses this month.".to_string();
    }

    let total = grand_total(totals);
    let max = totals.first().map(|t| t.total.as_decimal()).unwrap_or(0.0);

    let mut rows: Vec<Vec<String>> = totals
        .iter()
        .map(|t| {
            vec![
                category_label(categories, &t.category_id),
                t.total.format_with_symbol(symbol),
                format_percentage(t.percentage_of(total)),
                format_bar(t.total.as_decimal(), max, BAR_WIDTH),
            ]
        })
        .collect();
    rows.push(vec![
        "Total".to_string(),
        total.format_with_symbol(symbol),
        String::new(),
        String::new(),
    ]);

    render_table(
        &[
            ("Category", Align::Left),
            ("Spent", Align::Right),
            ("Share", Align::Right),
            ("", Align::Left),
        ],
        &rows,
    )
}

pub fn format_monthly_flows(flows: &[MonthlyTotals], symbol: &str) -> String {
    if flows.is_empty() {
        return "No transactions recorded yet.".to_string();
    }

    let rows: Vec<Vec<String>> = flows
        .iter()
        .map(|f| {
            vec![
                f.month.to_string(),
                f.income.format_with_symbol(symbol),
                f.expense.format_with_symbol(symbol),
                f.balance().format_with_symbol(symbol),
            ]
        })
        .collect();

    render_table(
        &[
            ("Month", Align::Left),
            ("Income", Align::Right),
            ("Expenses", Align::Right),
            ("Balance", Align::Right),
        ],
        &rows,
    )
}

pub fn format_history(transactions: &[&Transaction], categories: &[Category], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No matching transactions.".to_string();
    }

    let rows: Vec<Vec<String>> = transactions
        .iter()
        .map(|t| {
            let signed = if t.is_expense() { -t.amount } else { t.amount };
            vec![
                t.date.to_string(),
                category_label(categories, &t.category_id),
                t.member_id.map(|m| m.to_string()).unwrap_or_default(),
                signed.format_with_symbol(symbol),
                t.supplier_name().unwrap_or(&t.description).to_string(),
            ]
        })
        .collect();

    render_table(
        &[
            ("Date", Align::Left),
            ("Category", Align::Left),
            ("Member", Align::Left),
            ("Amount", Align::Right),
            ("Note", Align::Left),
        ],
        &rows,
    )
}

pub fn format_goals(goals: &[SavingsGoal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals.".to_string();
    }

    let rows: Vec<Vec<String>> = goals
        .iter()
        .map(|g| {
            vec![
                g.name.clone(),
                g.current_amount.format_with_symbol(symbol),
                g.target_amount.format_with_symbol(symbol),
                format_percentage(g.progress_percent()),
                format_bar(g.progress_percent(), 100.0, BAR_WIDTH),
                g.deadline.map(|d| d.to_string()).unwrap_or_default(),
            ]
        })
        .collect();

    render_table(
        &[
            ("Goal", Align::Left),
            ("Saved", Align::Right),
            ("Target", Align::Right),
            ("Progress", Align::Right),
            ("", Align::Left),
            ("Deadline", Align::Left),
        ],
        &rows,
    )
}

/// Remaining amount to reach a goal, for the detail line under the table
pub fn format_goal_remaining(goal: &SavingsGoal, symbol: &str) -> String {
    if goal.is_complete() {
        format!("{}: reached", goal.name)
    } else {
        let remaining: Money = goal.remaining();
        format!("{}: {} to go", goal.name, remaining.format_with_symbol(symbol))
    }
}
