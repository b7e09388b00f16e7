use super::percent;
use crate::models::record::SurveyRecord;
use crate::models::summary::{CategorySlice, CategoryTotals};

pub fn category_totals(records: &[SurveyRecord]) -> CategoryTotals {
    records
        .iter()
        .fold(CategoryTotals::default(), |acc, r| CategoryTotals {
            worked: acc.worked + u64::from(r.worked_units),
            informed: acc.informed + u64::from(r.informed_units),
            closed: acc.closed + u64::from(r.closed_units),
            recovered: acc.recovered + u64::from(r.recovered_units),
        })
}

/// Pie slices in fixed order: worked, informed, closed, recovered.
pub fn category_slices(totals: &CategoryTotals) -> Vec<CategorySlice> {
    let sum = totals.worked + totals.informed + totals.closed + totals.recovered;

    [
        ("Trabalhados", totals.worked),
        ("Informados", totals.informed),
        ("Fechados", totals.closed),
        ("Recuperados", totals.recovered),
    ]
    .into_iter()
    .map(|(name, value)| CategorySlice {
        name,
        value,
        share_pct: percent(value, sum),
    })
    .collect()
}
