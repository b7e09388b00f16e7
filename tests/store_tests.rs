mod common;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use common::{four_samples, record};
use rvectorsurvey::core::{Dashboard, RecordStore};
use rvectorsurvey::errors::AppError;
use rvectorsurvey::models::{ActivityCycle, EpiWeek, RecordInput, WorkModality};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};

fn manual(locality: &str, total: u32, worked: u32) -> RecordInput {
    RecordInput::manual(
        locality,
        total,
        worked,
        0,
        0,
        0,
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        WorkModality::StrategicPoint,
        EpiWeek::new(6).unwrap(),
        ActivityCycle::new(1).unwrap(),
    )
}

#[test]
fn test_append_assigns_id_and_created_at() {
    let mut store = RecordStore::new();
    let before = Utc::now();

    let first = store.append(manual("Centro", 10, 5)).clone();
    let second = store.append(manual("Fatima", 10, 5)).clone();

    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);
    assert!(first.created_at >= before);
    assert!(second.created_at >= first.created_at);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_append_keeps_supplied_identity() {
    let mut store = RecordStore::new();
    let imported = record("imp-42", "Zizo", 10, 3, 9);

    let stored = store.append(imported.clone()).clone();

    assert_eq!(stored, imported);
    assert_eq!(stored.id, "imp-42");
}

#[test]
fn test_append_batch_is_verbatim_and_ordered() {
    let mut store = RecordStore::new();
    store.append(manual("Antique", 10, 1));

    let batch = four_samples();
    let n = store.append_batch(batch.clone());

    assert_eq!(n, 4);
    assert_eq!(store.all()[0].locality, "Antique");
    assert_eq!(&store.all()[1..], batch.as_slice());
}

#[test]
fn test_empty_batch_is_a_no_op_scenario_c() {
    let mut store = RecordStore::new();
    store.append_batch(four_samples());
    let mut dashboard = Dashboard::with_store(store);

    let before_records = dashboard.records().to_vec();
    let before = dashboard.snapshot();

    let after = dashboard.import(Vec::new());

    assert_eq!(dashboard.records(), before_records.as_slice());
    assert_eq!(after, before);
}

static TICKS: AtomicI64 = AtomicI64::new(0);

/// Clock that jumps forward then back on alternate calls.
fn wobbly_clock() -> DateTime<Utc> {
    let n = TICKS.fetch_add(1, Ordering::SeqCst);
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    if n % 2 == 0 {
        base + Duration::seconds(60)
    } else {
        base
    }
}

#[test]
fn test_created_at_never_goes_backwards() {
    let mut store = RecordStore::with_clock(wobbly_clock);

    for i in 0..6 {
        store.append(manual(&format!("L{i}"), 10, 1));
    }

    let stamps: Vec<_> = store.all().iter().map(|r| r.created_at).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));

    let ids: HashSet<_> = store.all().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), 6, "engine-assigned ids must be unique");
}

#[test]
fn test_created_at_stays_ahead_of_future_dated_imports() {
    let mut store = RecordStore::new();
    let mut imported = record("imp-1", "Centro", 10, 5, 3);
    imported.created_at = Utc::now() + Duration::hours(1);

    store.append_batch(vec![imported.clone()]);
    let manual_stamp = store.append(manual("Fatima", 10, 5)).created_at;

    assert_eq!(store.all()[0].created_at, imported.created_at);
    assert!(manual_stamp >= imported.created_at);
}

#[test]
fn test_created_at_stays_ahead_of_supplied_stamp() {
    let mut store = RecordStore::new();
    let mut early = record("imp-2", "Zizo", 10, 3, 9);
    early.created_at = Utc::now() + Duration::minutes(30);

    store.append(early.clone());
    let manual_stamp = store.append(manual("Antique", 10, 1)).created_at;

    assert_eq!(store.all()[0].created_at, early.created_at);
    assert!(manual_stamp >= early.created_at);
}

#[test]
fn test_dashboard_add_returns_fresh_snapshot() {
    let mut dashboard = Dashboard::with_sample_data().unwrap();
    let before = dashboard.snapshot();

    let after = dashboard.add(manual("Mutuns", 200, 100)).unwrap();

    assert_eq!(after.total_records, before.total_records + 1);
    assert_eq!(after.filtered.len(), 5);
    assert_eq!(after.filtered.last().unwrap().locality, "Mutuns");
    assert_ne!(after.overall, before.overall);
}

#[test]
fn test_dashboard_add_rejects_invalid_input() {
    let mut dashboard = Dashboard::new();

    let err = dashboard.add(manual("Centro", 10, 11)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRecord(_)));

    let err = dashboard.add(manual("  ", 10, 1)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRecord(_)));

    let err = dashboard.add(manual("Centro", 0, 0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRecord(_)));

    assert!(dashboard.records().is_empty());
}

#[test]
fn test_added_record_respects_active_filters() {
    let mut dashboard = Dashboard::with_sample_data().unwrap();
    dashboard.update_filters(
        rvectorsurvey::models::FilterUpdate::default().week(EpiWeek::new(3).ok()),
    );

    // week 6 record is stored but not visible under week = 3
    let snap = dashboard.add(manual("Lomanto", 50, 25)).unwrap();

    assert_eq!(snap.total_records, 5);
    assert_eq!(snap.filtered.len(), 2);
}

#[test]
fn test_epi_week_bounds() {
    assert!(EpiWeek::new(0).is_err());
    assert!(EpiWeek::new(1).is_ok());
    assert!(EpiWeek::new(53).is_ok());
    assert!(matches!(EpiWeek::new(54), Err(AppError::InvalidWeek(_))));
}

#[test]
fn test_categorical_parsing() {
    assert_eq!(WorkModality::parse_input("li+t"), Some(WorkModality::SurveyTreatment));
    assert_eq!(WorkModality::parse_input("LI + T"), Some(WorkModality::SurveyTreatment));
    assert_eq!(WorkModality::from_code("li"), None);
    assert_eq!(WorkModality::parse_input("LIRAa"), None);

    assert_eq!(ActivityCycle::parse_input("Ciclo 03"), ActivityCycle::new(3));
    assert_eq!(ActivityCycle::parse_input("cycle 2"), ActivityCycle::new(2));
    assert_eq!(ActivityCycle::parse_input("6"), ActivityCycle::new(6));
    assert_eq!(ActivityCycle::parse_input("Ciclo 07"), None);
    assert_eq!(ActivityCycle::new(1).unwrap().label(), "Ciclo 01");
}

#[test]
fn test_record_serde_uses_codes() {
    let r = record("1", "Centro", 10, 5, 3);
    let json = serde_json::to_string(&r).unwrap();

    assert!(json.contains("\"work_modality\":\"LI\""));
    assert!(json.contains("\"activity_cycle\":\"Ciclo 01\""));
    assert!(json.contains("\"epidemiological_week\":3"));

    let bad = json.replace("\"epidemiological_week\":3", "\"epidemiological_week\":60");
    assert!(serde_json::from_str::<rvectorsurvey::models::SurveyRecord>(&bad).is_err());
}
