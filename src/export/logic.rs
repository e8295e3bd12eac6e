// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::allocation::BatchReport;
use crate::ui::messages::warning;
use crate::utils::path::absolutize;
use std::path::PathBuf;
use tracing::debug;

/// High-level export of a planning run.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `file` in the given format.
    ///
    /// `~` and relative paths are resolved first. Returns the final path,
    /// or `None` when there was nothing to export.
    pub fn export(
        report: &BatchReport,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if report.is_empty() {
            warning("No plan results to export.");
            return Ok(None);
        }

        let path = absolutize(file);
        ensure_writable(&path, force)?;

        debug!(path = %path.display(), format = format.as_str(), "exporting plan");

        match format {
            ExportFormat::Xlsx => export_xlsx(report, &path)?,
            ExportFormat::Csv => export_csv(report, &path)?,
            ExportFormat::Json => export_json(report, &path)?,
        }

        Ok(Some(path))
    }
}
