//! CLI command handlers
//!
//! Bridges clap argument parsing and the insight engine. Every handler
//! reads from an already loaded [`CliContext`]; nothing here writes to the
//! snapshot.

pub mod export;
pub mod insights;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use insights::{handle_insight_command, render_insight, InsightCommands};

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::Settings;
use crate::models::{MemberId, Month};
use crate::storage::Snapshot;

/// Everything a command needs, loaded once by the binary
#[derive(Debug, Clone)]
pub struct CliContext {
    pub snapshot: Snapshot,
    pub settings: Settings,
    /// The single clock reading for this invocation
    pub now: NaiveDateTime,
}

impl CliContext {
    pub fn new(snapshot: Snapshot, settings: Settings, now: NaiveDateTime) -> Self {
        Self {
            snapshot,
            settings,
            now,
        }
    }

    /// The requested month, or the current one
    pub fn month_or_current(&self, month: Option<Month>) -> Month {
        month.unwrap_or_else(|| Month::containing(self.now.date()))
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }
}

/// Parse a "YYYY-MM-DD" argument
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {} (expected YYYY-MM-DD)", s, e))
}

/// Parse a "YYYY-MM" argument
pub fn parse_month(s: &str) -> Result<Month, String> {
    Month::parse(s).map_err(|e| e.to_string())
}

/// Parse a member id ("mem_father") or role ("father")
pub fn parse_member(s: &str) -> Result<MemberId, String> {
    MemberId::parse(s).ok_or_else(|| {
        format!(
            "unknown member '{}' (expected one of: family, father, mother, daughter, baby)",
            s
        )
    })
}
