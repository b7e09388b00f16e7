use super::percent;
use crate::models::record::SurveyRecord;
use crate::models::summary::OverallStats;

/// Pooled sums over every record, then one ratio per category.
/// An empty subset (or a zero total) gives all zeros.
pub fn overall_stats(records: &[SurveyRecord]) -> OverallStats {
    if records.is_empty() {
        return OverallStats::default();
    }

    let mut total = 0u64;
    let mut worked = 0u64;
    let mut informed = 0u64;
    let mut closed = 0u64;
    let mut recovered = 0u64;

    for r in records {
        total += u64::from(r.total_units);
        worked += u64::from(r.worked_units);
        informed += u64::from(r.informed_units);
        closed += u64::from(r.closed_units);
        recovered += u64::from(r.recovered_units);
    }

    if total == 0 {
        return OverallStats::default();
    }

    OverallStats {
        worked_pct: percent(worked, total),
        informed_pct: percent(informed, total),
        closed_pct: percent(closed, total),
        recovered_pct: percent(recovered, total),
        coverage_pct: percent(worked, total),
    }
}
