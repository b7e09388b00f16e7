use super::{cycle::ActivityCycle, modality::WorkModality, week::EpiWeek};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One field-survey observation, fully formed and immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub id: String,
    pub locality: String,
    pub total_units: u32,
    pub worked_units: u32,
    pub informed_units: u32,
    pub closed_units: u32,
    pub recovered_units: u32,
    pub collection_date: NaiveDate,
    pub work_modality: WorkModality,
    pub epidemiological_week: EpiWeek,
    pub activity_cycle: ActivityCycle,
    pub created_at: DateTime<Utc>,
}

impl SurveyRecord {
    pub fn date_str(&self) -> String {
        self.collection_date.format("%Y-%m-%d").to_string()
    }

    /// Collection date as shown in the data table (dd/mm/yyyy).
    pub fn display_date(&self) -> String {
        self.collection_date.format("%d/%m/%Y").to_string()
    }
}

/// A record on its way into the store.
///
/// The manual-entry path leaves `id` and `created_at` empty and lets the
/// store assign them; the import path hands over records that already
/// carry both.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordInput {
    pub id: Option<String>,
    pub locality: String,
    pub total_units: u32,
    pub worked_units: u32,
    pub informed_units: u32,
    pub closed_units: u32,
    pub recovered_units: u32,
    pub collection_date: NaiveDate,
    pub work_modality: WorkModality,
    pub epidemiological_week: EpiWeek,
    pub activity_cycle: ActivityCycle,
    pub created_at: Option<DateTime<Utc>>,
}

impl RecordInput {
    /// Constructor used by the manual-entry form.
    /// - `id = None` (assigned by the store)
    /// - `created_at = None` (assigned by the store)
    #[allow(clippy::too_many_arguments)]
    pub fn manual(
        locality: impl Into<String>,
        total_units: u32,
        worked_units: u32,
        informed_units: u32,
        closed_units: u32,
        recovered_units: u32,
        collection_date: NaiveDate,
        work_modality: WorkModality,
        epidemiological_week: EpiWeek,
        activity_cycle: ActivityCycle,
    ) -> Self {
        Self {
            id: None,
            locality: locality.into(),
            total_units,
            worked_units,
            informed_units,
            closed_units,
            recovered_units,
            collection_date,
            work_modality,
            epidemiological_week,
            activity_cycle,
            created_at: None,
        }
    }

    /// Form-level checks: required locality, a positive total and
    /// worked units never above the total. Week, modality and cycle are
    /// already guaranteed by their types.
    pub fn validate(&self) -> AppResult<()> {
        if self.locality.trim().is_empty() {
            return Err(AppError::InvalidRecord("locality is required".into()));
        }

        if self.total_units < 1 {
            return Err(AppError::InvalidRecord(
                "total units must be greater than 0".into(),
            ));
        }

        if self.worked_units > self.total_units {
            return Err(AppError::InvalidRecord(format!(
                "worked units ({}) cannot exceed total units ({})",
                self.worked_units, self.total_units
            )));
        }

        Ok(())
    }

    /// Fill the missing identity fields and freeze the record.
    pub(crate) fn into_record(self, id: String, created_at: DateTime<Utc>) -> SurveyRecord {
        SurveyRecord {
            id: self.id.unwrap_or(id),
            locality: self.locality,
            total_units: self.total_units,
            worked_units: self.worked_units,
            informed_units: self.informed_units,
            closed_units: self.closed_units,
            recovered_units: self.recovered_units,
            collection_date: self.collection_date,
            work_modality: self.work_modality,
            epidemiological_week: self.epidemiological_week,
            activity_cycle: self.activity_cycle,
            created_at: self.created_at.unwrap_or(created_at),
        }
    }
}

impl From<SurveyRecord> for RecordInput {
    fn from(r: SurveyRecord) -> Self {
        Self {
            id: Some(r.id),
            locality: r.locality,
            total_units: r.total_units,
            worked_units: r.worked_units,
            informed_units: r.informed_units,
            closed_units: r.closed_units,
            recovered_units: r.recovered_units,
            collection_date: r.collection_date,
            work_modality: r.work_modality,
            epidemiological_week: r.epidemiological_week,
            activity_cycle: r.activity_cycle,
            created_at: Some(r.created_at),
        }
    }
}
