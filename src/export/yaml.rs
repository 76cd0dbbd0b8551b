//! YAML export of the insight views, for reading by humans

use std::io::Write;

use super::json::InsightExport;
use crate::error::{SahlaError, SahlaResult};

/// Write the export as YAML with a short header comment
pub fn export_yaml<W: Write>(export: &InsightExport, writer: &mut W) -> SahlaResult<()> {
    let header = format!(
        "# Sahla Budget insights for {}\n# Generated: {}\n# App Version: {}\n\n",
        export.month, export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| SahlaError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| SahlaError::Export(e.to_string()))?;

    Ok(())
}
