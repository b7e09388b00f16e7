//! Text renderings of a [`DashboardSnapshot`]: data table, stat cards and
//! the three chart views. Rounding to `decimals` happens here and only here.

use crate::core::calculator::locality::record_coverage;
use crate::core::calculator::totals::category_slices;
use crate::models::filter::FilterCriteria;
use crate::models::summary::DashboardSnapshot;
use crate::utils::formatting::{bar, pct, round_to, thousands};
use crate::utils::table::Table;

/// The data table ("Dados Coletados"), one row per filtered record.
pub fn data_table(snapshot: &DashboardSnapshot, decimals: usize, separator: char) -> String {
    let mut table = Table::new(
        vec![
            "Localidade",
            "Total",
            "Trabalhados",
            "Informados",
            "Fechados",
            "Recuperados",
            "Cobertura",
            "Modalidade",
            "SE",
            "Ciclo",
            "Data",
        ],
        separator,
    );

    for r in &snapshot.filtered {
        table.add_row(vec![
            r.locality.clone(),
            thousands(u64::from(r.total_units)),
            thousands(u64::from(r.worked_units)),
            thousands(u64::from(r.informed_units)),
            thousands(u64::from(r.closed_units)),
            thousands(u64::from(r.recovered_units)),
            pct(record_coverage(r), decimals),
            r.work_modality.code().to_string(),
            r.epidemiological_week.to_string(),
            r.activity_cycle.label(),
            r.display_date(),
        ]);
    }

    format!(
        "Dados Coletados ({} registros)\n{}",
        snapshot.filtered_count(),
        table.render()
    )
}

/// Card titles and formatted values, in display order.
pub fn stat_cards(snapshot: &DashboardSnapshot, decimals: usize) -> Vec<(&'static str, String)> {
    let s = &snapshot.overall;
    vec![
        ("Cobertura Geral", pct(s.coverage_pct, decimals)),
        ("Imóveis Trabalhados", pct(s.worked_pct, decimals)),
        ("Imóveis Informados", pct(s.informed_pct, decimals)),
        ("Imóveis Fechados", pct(s.closed_pct, decimals)),
        ("Imóveis Recuperados", pct(s.recovered_pct, decimals)),
    ]
}

/// Per-locality percentages (bar chart data).
pub fn bar_chart(snapshot: &DashboardSnapshot, decimals: usize, separator: char) -> String {
    let mut table = Table::new(
        vec!["Localidade", "Trabalhados", "Informados", "Fechados", "Recuperados"],
        separator,
    );

    for row in &snapshot.localities {
        table.add_row(vec![
            row.locality.clone(),
            round_to(row.worked_pct, decimals),
            round_to(row.informed_pct, decimals),
            round_to(row.closed_pct, decimals),
            round_to(row.recovered_pct, decimals),
        ]);
    }

    table.render()
}

/// Category totals with each slice's share (pie chart data).
pub fn pie_chart(snapshot: &DashboardSnapshot, separator: char) -> String {
    let mut table = Table::new(vec!["Categoria", "Imóveis", "Parcela"], separator);

    for slice in category_slices(&snapshot.totals) {
        table.add_row(vec![
            slice.name.to_string(),
            thousands(slice.value),
            pct(slice.share_pct, 0),
        ]);
    }

    table.render()
}

/// Weekly coverage line, one "SE n" point per week present.
pub fn line_chart(snapshot: &DashboardSnapshot, decimals: usize, separator: char) -> String {
    let mut points = snapshot.weekly.clone();
    points.sort_by_key(|p| p.week);

    let mut table = Table::new(vec!["Semana", "Cobertura", ""], separator);
    for p in &points {
        table.add_row(vec![
            p.week.label(),
            round_to(p.coverage_pct, decimals),
            bar(p.coverage_pct, 5.0),
        ]);
    }

    table.render()
}

/// One-line description of the active filters.
pub fn describe_filters(criteria: &FilterCriteria) -> String {
    if criteria.is_unset() {
        return "Filtros: nenhum".to_string();
    }

    let mut parts = Vec::new();
    if let Some(w) = criteria.week {
        parts.push(format!("semana={w}"));
    }
    if let Some(m) = criteria.modality {
        parts.push(format!("modalidade={m}"));
    }
    if !criteria.locality.is_empty() {
        parts.push(format!("localidade~{}", criteria.locality));
    }
    if let Some(c) = criteria.cycle {
        parts.push(format!("ciclo={c}"));
    }

    format!("Filtros: {}", parts.join(", "))
}
