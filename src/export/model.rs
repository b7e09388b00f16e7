// src/export/model.rs

use crate::core::calculator::locality::record_coverage;
use crate::models::record::SurveyRecord;
use serde::Serialize;

/// Flat row of the data table, one per filtered record.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: String,
    pub locality: String,
    pub total_units: u32,
    pub worked_units: u32,
    pub informed_units: u32,
    pub closed_units: u32,
    pub recovered_units: u32,
    /// Full precision; spreadsheets can round it themselves.
    pub coverage_pct: f64,
    pub work_modality: String,
    pub epidemiological_week: u8,
    pub activity_cycle: String,
    pub collection_date: String,
    pub created_at: String,
}

impl From<&SurveyRecord> for RecordExport {
    fn from(r: &SurveyRecord) -> Self {
        Self {
            id: r.id.clone(),
            locality: r.locality.clone(),
            total_units: r.total_units,
            worked_units: r.worked_units,
            informed_units: r.informed_units,
            closed_units: r.closed_units,
            recovered_units: r.recovered_units,
            coverage_pct: record_coverage(r),
            work_modality: r.work_modality.code().to_string(),
            epidemiological_week: r.epidemiological_week.get(),
            activity_cycle: r.activity_cycle.label(),
            collection_date: r.date_str(),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

pub(crate) fn records_to_rows(records: &[SurveyRecord]) -> Vec<RecordExport> {
    records.iter().map(RecordExport::from).collect()
}
