//! Import collaborator.
//!
//! Spreadsheet/PDF parsing is not implemented: an accepted file yields one
//! synthetic, fully-formed record and its content is never read.

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityCycle, EpiWeek, SurveyRecord, WorkModality};
use crate::utils::date::today;
use chrono::Utc;
use std::io;
use std::path::Path;
use tracing::{info, warn};

const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "pdf"];

pub struct ImportLogic;

impl ImportLogic {
    /// Check the file type and build the records to hand to `append_batch`.
    pub fn records_from_file(path: &Path) -> AppResult<Vec<SurveyRecord>> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::UnsupportedImport(path.display().to_string()))?;

        if !Self::is_supported(path) {
            warn!(file = %file_name, "rejected import file type");
            return Err(AppError::UnsupportedImport(file_name));
        }

        if !path.is_file() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("import file not found: {}", path.display()),
            )));
        }

        info!(file = %file_name, "processing import file");

        let stem = file_name.split('.').next().unwrap_or_default();
        Ok(vec![Self::synthetic_record(stem)?])
    }

    pub fn is_supported(path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|e| ALLOWED_EXTENSIONS.contains(&e.as_str()))
    }

    fn synthetic_record(stem: &str) -> AppResult<SurveyRecord> {
        let now = Utc::now();
        let cycle = ActivityCycle::new(1).ok_or_else(|| AppError::InvalidCycle("1".into()))?;

        Ok(SurveyRecord {
            id: now.timestamp_millis().to_string(),
            locality: format!("Importado - {stem}"),
            total_units: 500,
            worked_units: 420,
            informed_units: 380,
            closed_units: 40,
            recovered_units: 20,
            collection_date: today(),
            work_modality: WorkModality::Survey,
            epidemiological_week: EpiWeek::new(5)?,
            activity_cycle: cycle,
            created_at: now,
        })
    }
}
