//! Aggregations over the filtered subset.
//!
//! All results are full precision; rounding belongs to the presentation
//! layer (`utils::formatting::pct`).

pub mod locality;
pub mod overall;
pub mod totals;
pub mod weekly;

/// `num / den * 100`, with a zero denominator yielding `0.0`.
pub fn percent(num: u64, den: u64) -> f64 {
    if den == 0 {
        return 0.0;
    }
    (num as f64 / den as f64) * 100.0
}
