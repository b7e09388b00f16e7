//! Weekly coverage line.
//!
//! Each week's value is the plain mean of the per-record coverages,
//! not sum(worked) / sum(total): a small locality weighs as much as a
//! large one.

use super::percent;
use crate::models::record::SurveyRecord;
use crate::models::summary::WeeklyCoverage;
use crate::models::week::EpiWeek;
use std::collections::BTreeMap;

pub fn weekly_coverage(records: &[SurveyRecord]) -> Vec<WeeklyCoverage> {
    let mut groups: BTreeMap<EpiWeek, (f64, usize)> = BTreeMap::new();

    for r in records {
        let coverage = percent(u64::from(r.worked_units), u64::from(r.total_units));
        let entry = groups.entry(r.epidemiological_week).or_insert((0.0, 0));
        entry.0 += coverage;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(week, (sum, count))| WeeklyCoverage {
            week,
            coverage_pct: sum / count as f64,
            records: count,
        })
        .collect()
}
