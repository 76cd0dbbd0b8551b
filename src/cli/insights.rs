//! CLI commands for the insight views

use chrono::NaiveDate;
use clap::Subcommand;

use super::{parse_date, parse_member, parse_month, CliContext};
use crate::display;
use crate::error::{SahlaError, SahlaResult};
use crate::insights::{
    compare_suppliers, compute_consumption, monthly_flows, resolve_best_deals,
    suggest_restocks_within, summarize_by_category, AdviceSummary, MonthlyTotals,
    TransactionFilter,
};
use crate::models::{CategoryId, MemberId, Month, Transaction};
use crate::storage::TransactionSource;

/// Insight subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum InsightCommands {
    /// Kilograms bought per item in a month
    Consumption {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = parse_month)]
        month: Option<Month>,
    },

    /// Average price per kilogram per item and supplier
    Suppliers,

    /// Best purchase for each essential item
    Deals,

    /// Essential items due for restocking
    Restock {
        /// Evaluate as of this date (YYYY-MM-DD) instead of now
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Monthly income, expenses and budget alert
    Budget {
        #[arg(short, long, value_parser = parse_month)]
        month: Option<Month>,
    },

    /// Expenses per category for a month
    Categories {
        #[arg(short, long, value_parser = parse_month)]
        month: Option<Month>,
    },

    /// Income and expenses over the last months
    Monthly {
        /// Number of months, defaults to the configured chart length
        #[arg(short = 'n', long)]
        months: Option<usize>,
    },

    /// Transactions, optionally filtered by member and category
    History {
        /// Member id or role (father, mother, daughter, baby, family)
        #[arg(long, value_parser = parse_member)]
        member: Option<MemberId>,

        /// Category id (e.g. exp_market)
        #[arg(long)]
        category: Option<String>,

        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Savings goals and progress
    Goals {
        /// Show a single goal, by id or name
        goal: Option<String>,
    },

    /// The summary sent to the advice generator, as JSON
    AdviceSummary {
        #[arg(short, long, value_parser = parse_month)]
        month: Option<Month>,

        /// Print the full generator prompt instead of the JSON summary
        #[arg(long)]
        prompt: bool,
    },
}

/// Render an insight command to text
pub fn render_insight(ctx: &CliContext, cmd: &InsightCommands) -> SahlaResult<String> {
    let transactions = ctx.snapshot.transactions();
    let symbol = ctx.currency();

    let output = match cmd {
        InsightCommands::Consumption { month } => {
            let month = ctx.month_or_current(*month);
            let entries = compute_consumption(transactions, month.start_date());
            format!(
                "Consumption for {}\n\n{}",
                month,
                display::format_consumption(&entries)
            )
        }
        InsightCommands::Suppliers => {
            display::format_supplier_comparison(&compare_suppliers(transactions), symbol)
        }
        InsightCommands::Deals => display::format_best_deals(&resolve_best_deals(transactions), symbol),
        InsightCommands::Restock { today } => {
            let now = match today {
                Some(date) => date.and_time(chrono::NaiveTime::MIN),
                None => ctx.now,
            };
            let suggestions =
                suggest_restocks_within(transactions, now, ctx.settings.restock_window_days);
            display::format_restock(&suggestions)
        }
        InsightCommands::Budget { month } => {
            let totals = MonthlyTotals::for_month(transactions, ctx.month_or_current(*month));
            display::format_budget_health(&totals, symbol)
        }
        InsightCommands::Categories { month } => {
            let month = ctx.month_or_current(*month);
            let in_month: Vec<Transaction> = transactions
                .iter()
                .filter(|t| month.contains(t.date))
                .cloned()
                .collect();
            format!(
                "Expenses for {}\n\n{}",
                month,
                display::format_category_totals(
                    &summarize_by_category(&in_month),
                    &ctx.snapshot.categories(),
                    symbol
                )
            )
        }
        InsightCommands::Monthly { months } => {
            let limit = months.unwrap_or(ctx.settings.monthly_chart_months);
            if limit == 0 {
                return Err(SahlaError::Validation(
                    "--months must be at least 1".into(),
                ));
            }
            display::format_monthly_flows(&monthly_flows(transactions, limit), symbol)
        }
        InsightCommands::History {
            member,
            category,
            limit,
        } => {
            let categories = ctx.snapshot.categories();
            let mut filter = TransactionFilter::all();
            if let Some(member) = member {
                filter = filter.for_member(*member);
            }
            if let Some(category) = category {
                let id = CategoryId::from_raw(category.trim());
                if !categories.iter().any(|c| c.id == id) {
                    return Err(SahlaError::category_not_found(category.as_str()));
                }
                filter = filter.for_category(id);
            }

            let mut matched = filter.apply(transactions);
            if let Some(limit) = limit {
                matched.truncate(*limit);
            }
            display::format_history(&matched, &categories, symbol)
        }
        InsightCommands::Goals { goal } => {
            let goals = match goal {
                Some(key) => std::slice::from_ref(ctx.snapshot.find_goal(key)?),
                None => ctx.snapshot.goals(),
            };
            let mut output = display::format_goals(goals, symbol);
            if !goals.is_empty() {
                output.push('\n');
                for goal in goals {
                    output.push_str(&display::format_goal_remaining(goal, symbol));
                    output.push('\n');
                }
            }
            output
        }
        InsightCommands::AdviceSummary { month, prompt } => {
            let summary = AdviceSummary::build(
                transactions,
                &ctx.snapshot.categories(),
                ctx.month_or_current(*month),
                ctx.settings.advice_transaction_limit,
            );
            if *prompt {
                summary.prompt(ctx.settings.language)
            } else {
                serde_json::to_string_pretty(&summary)?
            }
        }
    };

    Ok(output)
}

/// Handle an insight command, printing the result
pub fn handle_insight_command(ctx: &CliContext, cmd: InsightCommands) -> SahlaResult<()> {
    let output = render_insight(ctx, &cmd)?;
    println!("{}", output.trim_end());
    Ok(())
}
