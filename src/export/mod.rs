//! Export module for Sahla Budget
//!
//! Writes the insight views for a month in three formats:
//! - JSON: machine-readable, full detail
//! - YAML: human-readable, full detail
//! - CSV: the tabular views, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

#[cfg(test)]
pub(crate) mod sample;

pub use self::csv::export_csv;
pub use json::{export_json, InsightExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
