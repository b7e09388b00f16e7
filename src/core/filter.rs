//! Record/criteria predicate. Each active criterion must hold (logical AND).

use crate::models::filter::FilterCriteria;
use crate::models::record::SurveyRecord;

pub fn matches(record: &SurveyRecord, criteria: &FilterCriteria) -> bool {
    week_matches(record, criteria)
        && modality_matches(record, criteria)
        && locality_matches(record, criteria)
        && cycle_matches(record, criteria)
}

fn week_matches(record: &SurveyRecord, criteria: &FilterCriteria) -> bool {
    criteria
        .week
        .is_none_or(|w| record.epidemiological_week == w)
}

fn modality_matches(record: &SurveyRecord, criteria: &FilterCriteria) -> bool {
    criteria
        .modality
        .is_none_or(|m| record.work_modality == m)
}

/// Empty text means "no filter"; otherwise case-insensitive substring.
fn locality_matches(record: &SurveyRecord, criteria: &FilterCriteria) -> bool {
    if criteria.locality.is_empty() {
        return true;
    }

    record
        .locality
        .to_lowercase()
        .contains(&criteria.locality.to_lowercase())
}

fn cycle_matches(record: &SurveyRecord, criteria: &FilterCriteria) -> bool {
    criteria.cycle.is_none_or(|c| record.activity_cycle == c)
}
