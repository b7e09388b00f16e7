#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, TimeZone, Utc};
use rvectorsurvey::models::{ActivityCycle, EpiWeek, SurveyRecord, WorkModality};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rvs() -> Command {
    cargo_bin_cmd!("rvectorsurvey")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rvectorsurvey_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fully-formed record with only the fields most tests care about.
pub fn record(id: &str, locality: &str, total: u32, worked: u32, week: u8) -> SurveyRecord {
    SurveyRecord {
        id: id.to_string(),
        locality: locality.to_string(),
        total_units: total,
        worked_units: worked,
        informed_units: 0,
        closed_units: 0,
        recovered_units: 0,
        collection_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
        work_modality: WorkModality::Survey,
        epidemiological_week: EpiWeek::new(week).expect("week"),
        activity_cycle: ActivityCycle::new(1).expect("cycle"),
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 15, 10, 0, 0)
            .single()
            .expect("timestamp"),
    }
}

pub fn record_full(
    id: &str,
    locality: &str,
    counts: [u32; 5],
    week: u8,
    modality: WorkModality,
    cycle: u8,
) -> SurveyRecord {
    let [total, worked, informed, closed, recovered] = counts;
    SurveyRecord {
        total_units: total,
        worked_units: worked,
        informed_units: informed,
        closed_units: closed,
        recovered_units: recovered,
        work_modality: modality,
        activity_cycle: ActivityCycle::new(cycle).expect("cycle"),
        ..record(id, locality, total, worked, week)
    }
}

/// The four records of the demonstration dataset.
pub fn four_samples() -> Vec<SurveyRecord> {
    vec![
        record_full("1", "Centro", [1200, 980, 850, 120, 10], 3, WorkModality::Survey, 1),
        record_full("2", "Jardim Brasil", [800, 650, 520, 80, 50], 3, WorkModality::StrategicPoint, 1),
        record_full("3", "Santa Catarina", [1500, 1300, 1100, 150, 50], 4, WorkModality::SurveyTreatment, 2),
        record_full("4", "Nova California", [950, 820, 700, 90, 30], 4, WorkModality::Treatment, 2),
    ]
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
