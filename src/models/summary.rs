use super::{record::SurveyRecord, week::EpiWeek};
use serde::Serialize;

/// Pooled percentages over the filtered subset (the dashboard cards).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OverallStats {
    pub worked_pct: f64,
    pub informed_pct: f64,
    pub closed_pct: f64,
    pub recovered_pct: f64,
    /// Overall coverage; same pooled ratio as `worked_pct`.
    pub coverage_pct: f64,
}

/// Raw unit sums per category, not normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub worked: u64,
    pub informed: u64,
    pub closed: u64,
    pub recovered: u64,
}

/// One pie slice derived from [`CategoryTotals`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub name: &'static str,
    pub value: u64,
    /// Share of the slice within the four categories, 0..=100.
    pub share_pct: f64,
}

/// Mean of per-record coverage for one epidemiological week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyCoverage {
    pub week: EpiWeek,
    pub coverage_pct: f64,
    pub records: usize,
}

/// Per-record percentages keyed by locality (bar chart row).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalityRow {
    pub locality: String,
    pub worked_pct: f64,
    pub informed_pct: f64,
    pub closed_pct: f64,
    pub recovered_pct: f64,
}

/// Everything a consumer needs to render after a change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub total_records: usize,
    pub filtered: Vec<SurveyRecord>,
    pub overall: OverallStats,
    pub totals: CategoryTotals,
    pub weekly: Vec<WeeklyCoverage>,
    pub localities: Vec<LocalityRow>,
}

impl DashboardSnapshot {
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }
}
