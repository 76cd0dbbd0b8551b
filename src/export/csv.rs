//! CSV export of the insight views
//!
//! One file, one section per view. Each section starts with a single-cell
//! title row (`[best_deals]`), followed by its header row and data rows.

use std::io::Write;

use super::json::InsightExport;
use crate::error::{SahlaError, SahlaResult};

fn export_err(e: impl std::fmt::Display) -> SahlaError {
    SahlaError::Export(e.to_string())
}

/// Write every tabular view as CSV sections
pub fn export_csv<W: Write>(export: &InsightExport, writer: W) -> SahlaResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    wtr.write_record(["[best_deals]"]).map_err(export_err)?;
    wtr.write_record(["item", "supplier", "price", "quality", "last_purchase"])
        .map_err(export_err)?;
    for deal in &export.best_deals {
        wtr.write_record([
            deal.display_name(),
            deal.best_supplier.clone(),
            deal.best_price.to_string(),
            deal.best_quality.to_string(),
            deal.last_purchase_date.to_string(),
        ])
        .map_err(export_err)?;
    }

    wtr.write_record(["[restock]"]).map_err(export_err)?;
    wtr.write_record(["item", "days_since_last_purchase"])
        .map_err(export_err)?;
    for suggestion in &export.restock {
        wtr.write_record([
            suggestion.display_name(),
            suggestion.days_since_last_purchase.to_string(),
        ])
        .map_err(export_err)?;
    }

    wtr.write_record(["[consumption]"]).map_err(export_err)?;
    wtr.write_record(["item", "total_weight_kg"]).map_err(export_err)?;
    for entry in &export.consumption {
        wtr.write_record([entry.item_name.clone(), format!("{:.3}", entry.total_weight_kg)])
            .map_err(export_err)?;
    }

    wtr.write_record(["[supplier_prices]"]).map_err(export_err)?;
    wtr.write_record(["item", "supplier", "price_per_kg"])
        .map_err(export_err)?;
    for entry in &export.supplier_prices {
        wtr.write_record([
            entry.item_name.clone(),
            entry.supplier_name.clone(),
            format!("{:.2}", entry.average_unit_price),
        ])
        .map_err(export_err)?;
    }

    wtr.write_record(["[category_totals]"]).map_err(export_err)?;
    wtr.write_record(["category", "total"]).map_err(export_err)?;
    for total in &export.category_totals {
        wtr.write_record([total.category_id.to_string(), total.total.to_string()])
            .map_err(export_err)?;
    }

    wtr.flush().map_err(export_err)?;
    Ok(())
}
