//! Demonstration dataset the dashboard starts with.

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityCycle, EpiWeek, SurveyRecord, WorkModality};
use chrono::{DateTime, NaiveDate, Utc};

struct SampleRow {
    id: &'static str,
    locality: &'static str,
    counts: [u32; 5],
    date: &'static str,
    modality: WorkModality,
    week: u8,
    cycle: u8,
    created_at: &'static str,
}

const SAMPLE: [SampleRow; 4] = [
    SampleRow {
        id: "1",
        locality: "Centro",
        counts: [1200, 980, 850, 120, 10],
        date: "2024-01-15",
        modality: WorkModality::Survey,
        week: 3,
        cycle: 1,
        created_at: "2024-01-15T10:00:00Z",
    },
    SampleRow {
        id: "2",
        locality: "Jardim Brasil",
        counts: [800, 650, 520, 80, 50],
        date: "2024-01-16",
        modality: WorkModality::StrategicPoint,
        week: 3,
        cycle: 1,
        created_at: "2024-01-16T14:30:00Z",
    },
    SampleRow {
        id: "3",
        locality: "Santa Catarina",
        counts: [1500, 1300, 1100, 150, 50],
        date: "2024-01-17",
        modality: WorkModality::SurveyTreatment,
        week: 4,
        cycle: 2,
        created_at: "2024-01-17T09:15:00Z",
    },
    SampleRow {
        id: "4",
        locality: "Nova California",
        counts: [950, 820, 700, 90, 30],
        date: "2024-01-18",
        modality: WorkModality::Treatment,
        week: 4,
        cycle: 2,
        created_at: "2024-01-18T11:20:00Z",
    },
];

pub fn sample_records() -> AppResult<Vec<SurveyRecord>> {
    SAMPLE.iter().map(to_record).collect()
}

fn to_record(row: &SampleRow) -> AppResult<SurveyRecord> {
    let [total, worked, informed, closed, recovered] = row.counts;

    let collection_date = NaiveDate::parse_from_str(row.date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(row.date.to_string()))?;
    let created_at = DateTime::parse_from_rfc3339(row.created_at)
        .map_err(|_| AppError::InvalidDate(row.created_at.to_string()))?
        .with_timezone(&Utc);
    let activity_cycle =
        ActivityCycle::new(row.cycle).ok_or_else(|| AppError::InvalidCycle(row.cycle.to_string()))?;

    Ok(SurveyRecord {
        id: row.id.to_string(),
        locality: row.locality.to_string(),
        total_units: total,
        worked_units: worked,
        informed_units: informed,
        closed_units: closed,
        recovered_units: recovered,
        collection_date,
        work_modality: row.modality,
        epidemiological_week: EpiWeek::new(row.week)?,
        activity_cycle,
        created_at,
    })
}
