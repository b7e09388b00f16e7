//! Filtered view of the store.
//!
//! The view is rebuilt from scratch on every call; nothing is cached
//! between calls, so a changed store or changed criteria can never
//! produce a stale result.

use crate::core::filter::matches;
use crate::models::filter::FilterCriteria;
use crate::models::record::SurveyRecord;

/// Records matching `criteria`, in store order.
pub fn project<'a>(records: &'a [SurveyRecord], criteria: &FilterCriteria) -> Vec<&'a SurveyRecord> {
    records.iter().filter(|r| matches(r, criteria)).collect()
}
