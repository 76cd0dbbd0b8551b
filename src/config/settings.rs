//! User settings for Sahla Budget
//!
//! Display preferences plus the tunables of the insight views: freshness
//! window, how many transactions feed an advice request, and how many
//! months the trend chart shows.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::SahlaPaths;
use crate::error::SahlaError;
use crate::storage::file_io::{read_json_required, write_json_atomic};

/// Interface and advice language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// French (default)
    #[default]
    Fr,
    /// Modern standard Arabic
    Ar,
    /// Moroccan Darija, written in Arabic script
    Dar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::Ar => "ar",
            Self::Dar => "dar",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "french" => Some(Self::Fr),
            "ar" | "arabic" => Some(Self::Ar),
            "dar" | "darija" => Some(Self::Dar),
            _ => None,
        }
    }

    /// The reply-language instruction appended to advice prompts
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Fr => "Réponds en français.",
            Self::Ar => "Réponds en Arabe standard (اللغة العربية الفصحى).",
            Self::Dar => {
                "Réponds en dialecte marocain (Darija), en utilisant l'alphabet arabe."
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// User settings for Sahla Budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub language: Language,

    /// Currency symbol shown after amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Days after which an essential item is due for restock
    #[serde(default = "default_restock_window_days")]
    pub restock_window_days: i64,

    /// Number of most recent transactions summarized for advice
    #[serde(default = "default_advice_transaction_limit")]
    pub advice_transaction_limit: usize,

    /// Number of months on the income/expense trend chart
    #[serde(default = "default_monthly_chart_months")]
    pub monthly_chart_months: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "MAD".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_restock_window_days() -> i64 {
    crate::insights::FRESHNESS_WINDOW_DAYS
}

fn default_advice_transaction_limit() -> usize {
    crate::insights::DEFAULT_ADVICE_LIMIT
}

fn default_monthly_chart_months() -> usize {
    crate::insights::DEFAULT_CHART_MONTHS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            language: Language::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            restock_window_days: default_restock_window_days(),
            advice_transaction_limit: default_advice_transaction_limit(),
            monthly_chart_months: default_monthly_chart_months(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// Defaults are not written back; call [`Settings::save`] to persist.
    pub fn load_or_create(paths: &SahlaPaths) -> Result<Self, SahlaError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let settings: Settings = read_json_required(&settings_path)
            .map_err(|e| SahlaError::Config(format!("Failed to load settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SahlaPaths) -> Result<(), SahlaError> {
        self.validate()?;
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Reject values the insight views cannot work with
    pub fn validate(&self) -> Result<(), SahlaError> {
        if self.restock_window_days < 0 {
            return Err(SahlaError::Config(format!(
                "restock_window_days must not be negative, got {}",
                self.restock_window_days
            )));
        }
        if self.advice_transaction_limit == 0 {
            return Err(SahlaError::Config(
                "advice_transaction_limit must be at least 1".into(),
            ));
        }
        if self.monthly_chart_months == 0 {
            return Err(SahlaError::Config(
                "monthly_chart_months must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
