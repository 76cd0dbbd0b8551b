//! Financial advice requests
//!
//! The engine only prepares the compact summary sent to an external text
//! generator and wraps the call; the generator itself lives outside the
//! crate behind [`AdviceGenerator`].

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::settings::Language;
use crate::error::{SahlaError, SahlaResult};
use crate::models::{category_label, Category, Money, Month, Transaction, TransactionKind};

/// Number of recent transactions included in a summary by default
pub const DEFAULT_ADVICE_LIMIT: usize = 50;

/// The household description given to the generator
const HOUSEHOLD_CONTEXT: &str = "Tu es un conseiller financier expert pour une famille marocaine \
(Père, Mère, Fille 6 ans, Bébé 1.5 an).";

/// Compact view of recent activity handed to the advice generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceSummary {
    pub current_month: Month,
    pub total_income: Money,
    pub total_expense: Money,
    /// Expense totals keyed by category display name
    pub expenses_by_category: BTreeMap<String, Money>,
    /// Number of transactions the summary covers
    pub transaction_count: usize,
}

impl AdviceSummary {
    /// Summarize the first `limit` transactions, as listed (newest first)
    pub fn build(
        transactions: &[Transaction],
        categories: &[Category],
        current_month: Month,
        limit: usize,
    ) -> Self {
        let recent = &transactions[..transactions.len().min(limit)];

        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut expenses_by_category: BTreeMap<String, Money> = BTreeMap::new();

        for txn in recent {
            match txn.kind {
                TransactionKind::Income => total_income += txn.amount,
                TransactionKind::Expense => {
                    total_expense += txn.amount;
                    *expenses_by_category
                        .entry(category_label(categories, &txn.category_id))
                        .or_default() += txn.amount;
                }
            }
        }

        Self {
            current_month,
            total_income,
            total_expense,
            expenses_by_category,
            transaction_count: recent.len(),
        }
    }

    /// Plain-text block describing the figures
    pub fn render(&self) -> String {
        let categories = self
            .expenses_by_category
            .iter()
            .map(|(name, total)| format!("{}: {}", name, total))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Current Month: {}\nTotal Income: {}\nTotal Expenses: {}\nExpenses by Category: {}",
            self.current_month, self.total_income, self.total_expense, categories
        )
    }

    /// Full instruction text for a generator, in the requested language
    pub fn prompt(&self, language: Language) -> String {
        format!(
            "{}\nVoici le résumé financier récent de la famille :\n{}\n\n\
             Analyse ces données et donne 3 conseils brefs, précis et bienveillants.\n\
             Objectifs:\n\
             1. Optimiser les dépenses.\n\
             2. Mieux préparer les événements annuels (Aïd Al Adha, Ramadan, Rentrée scolaire).\n\
             3. Améliorer l'épargne.\n\n\
             Instructions de langue : {}\n\n\
             Sois direct, utilise des puces, et un ton encourageant.",
            HOUSEHOLD_CONTEXT,
            self.render(),
            language.instruction()
        )
    }
}

/// An external text generator producing advice from a summary
pub trait AdviceGenerator {
    fn generate(&self, summary: &AdviceSummary, language: Language) -> SahlaResult<String>;
}

/// Ask the generator for advice once
///
/// Generator failures and blank responses both surface as
/// [`SahlaError::Advice`]; nothing is retried.
pub fn request_advice<G: AdviceGenerator + ?Sized>(
    generator: &G,
    summary: &AdviceSummary,
    language: Language,
) -> SahlaResult<String> {
    let text = generator.generate(summary, language).map_err(|e| {
        tracing::warn!(error = %e, month = %summary.current_month, "advice generation failed");
        match e {
            SahlaError::Advice(_) => e,
            other => SahlaError::Advice(other.to_string()),
        }
    })?;

    let text = text.trim();
    if text.is_empty() {
        tracing::warn!(month = %summary.current_month, "advice generator returned an empty response");
        return Err(SahlaError::Advice("empty response from generator".into()));
    }

    Ok(text.to_string())
}
