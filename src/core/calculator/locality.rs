use super::percent;
use crate::models::record::SurveyRecord;
use crate::models::summary::LocalityRow;

/// One bar-chart row per record (records are not grouped by locality).
pub fn locality_rows(records: &[SurveyRecord]) -> Vec<LocalityRow> {
    records.iter().map(locality_row).collect()
}

pub fn locality_row(r: &SurveyRecord) -> LocalityRow {
    let total = u64::from(r.total_units);
    LocalityRow {
        locality: r.locality.clone(),
        worked_pct: percent(u64::from(r.worked_units), total),
        informed_pct: percent(u64::from(r.informed_units), total),
        closed_pct: percent(u64::from(r.closed_units), total),
        recovered_pct: percent(u64::from(r.recovered_units), total),
    }
}

/// Coverage of a single record, as shown in the data table.
pub fn record_coverage(r: &SurveyRecord) -> f64 {
    percent(u64::from(r.worked_units), u64::from(r.total_units))
}
