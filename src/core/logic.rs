use crate::core::calculator::{locality, overall, totals, weekly};
use crate::core::projector::project;
use crate::models::filter::FilterCriteria;
use crate::models::record::SurveyRecord;
use crate::models::summary::DashboardSnapshot;

pub struct Core;

impl Core {
    /// Project the records through `criteria` and compute every aggregate
    /// from that one subset.
    pub fn build_snapshot(records: &[SurveyRecord], criteria: &FilterCriteria) -> DashboardSnapshot {
        let filtered: Vec<SurveyRecord> = project(records, criteria).into_iter().cloned().collect();

        DashboardSnapshot {
            total_records: records.len(),
            overall: overall::overall_stats(&filtered),
            totals: totals::category_totals(&filtered),
            weekly: weekly::weekly_coverage(&filtered),
            localities: locality::locality_rows(&filtered),
            filtered,
        }
    }
}
