// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::records_to_rows;
use crate::models::summary::DashboardSnapshot;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// High-level export of the filtered data table.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the filtered records of `snapshot` to `file`.
    ///
    /// Returns the number of rows written; an empty view writes nothing.
    pub fn export(
        snapshot: &DashboardSnapshot,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if path.is_dir() {
            return Err(AppError::Export(format!("{file} is a directory")));
        }

        let rows = records_to_rows(&snapshot.filtered);

        if rows.is_empty() {
            warning("No records match the current filters; nothing exported.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        debug!(format = format.as_str(), rows = rows.len(), "exporting records");

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
