//! CLI command for exporting insight reports

use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::{parse_month, CliContext};
use crate::error::{SahlaError, SahlaResult};
use crate::export::{export_csv, export_json, export_yaml, InsightExport};
use crate::models::Month;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON, every view
    Json,
    /// YAML, every view, human-readable
    Yaml,
    /// CSV, the tabular views as sections
    Csv,
}

/// Arguments of `sahla export`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Month (YYYY-MM) for the month-scoped views, defaults to the current month
    #[arg(short, long, value_parser = parse_month)]
    pub month: Option<Month>,

    /// Compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Write the report for `args` into any writer
pub fn write_export<W: Write>(
    ctx: &CliContext,
    args: &ExportArgs,
    exported_at: DateTime<Utc>,
    writer: &mut W,
) -> SahlaResult<InsightExport> {
    let export = InsightExport::build(
        &ctx.snapshot,
        &ctx.settings,
        ctx.month_or_current(args.month),
        ctx.now,
        exported_at,
    );

    match args.format {
        ExportFormat::Json => export_json(&export, writer, !args.compact)?,
        ExportFormat::Yaml => export_yaml(&export, writer)?,
        ExportFormat::Csv => export_csv(&export, &mut *writer)?,
    }

    Ok(export)
}

/// Handle `sahla export`
pub fn handle_export_command(
    ctx: &CliContext,
    args: ExportArgs,
    exported_at: DateTime<Utc>,
) -> SahlaResult<()> {
    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            SahlaError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(&args.output).map_err(|e| {
        SahlaError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let export = write_export(ctx, &args, exported_at, &mut writer)?;
    writer
        .flush()
        .map_err(|e| SahlaError::Export(e.to_string()))?;

    tracing::info!(
        path = %args.output.display(),
        format = ?args.format,
        month = %export.month,
        "exported insights"
    );
    println!(
        "Insights for {} exported to: {}",
        export.month,
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::export::sample::{exported_at, now, sample_snapshot};
    use tempfile::TempDir;

    fn context() -> CliContext {
        CliContext::new(sample_snapshot(), Settings::default(), now())
    }

    fn args(output: PathBuf, format: ExportFormat) -> ExportArgs {
        ExportArgs {
            output,
            format,
            month: None,
            compact: false,
        }
    }

    #[test]
    fn test_write_each_format() {
        let ctx = context();

        let mut json = Vec::new();
        write_export(&ctx, &args("x.json".into(), ExportFormat::Json), exported_at(), &mut json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["month"], "2025-03");

        let mut yaml = Vec::new();
        write_export(&ctx, &args("x.yaml".into(), ExportFormat::Yaml), exported_at(), &mut yaml).unwrap();
        assert!(String::from_utf8(yaml).unwrap().starts_with("# Sahla Budget"));

        let mut csv = Vec::new();
        write_export(&ctx, &args("x.csv".into(), ExportFormat::Csv), exported_at(), &mut csv).unwrap();
        assert!(String::from_utf8(csv).unwrap().starts_with("[best_deals]"));
    }

    #[test]
    fn test_handle_export_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("reports").join("march.json");

        handle_export_command(&context(), args(output.clone(), ExportFormat::Json), exported_at())
            .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("\"best_deals\""));
    }
}
