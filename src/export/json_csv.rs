// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{OutcomeExport, allocation_rows};
use crate::export::notify_export_success;
use crate::models::allocation::BatchReport;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: one object per line outcome.
pub(crate) fn export_json(report: &BatchReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let outcomes: Vec<OutcomeExport<'_>> = report.outcomes.iter().map(OutcomeExport::from).collect();

    let json_data = serde_json::to_string_pretty(&outcomes)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV of allocation rows (header included thanks to serde).
pub(crate) fn export_csv(report: &BatchReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in allocation_rows(report) {
        wtr.serialize(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
