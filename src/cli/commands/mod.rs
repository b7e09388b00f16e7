pub mod add;
pub mod charts;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod refs;
pub mod stats;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::models::summary::DashboardSnapshot;
use crate::ui::{messages, render};
use crate::utils::colors::color_for_coverage;

/// Merge the command-line filters into the dashboard and return the new view.
pub(crate) fn apply_filters(
    dashboard: &mut Dashboard,
    filters: &FilterArgs,
) -> AppResult<DashboardSnapshot> {
    let update = filters.to_update()?;
    if update.is_empty() {
        return Ok(dashboard.snapshot());
    }
    Ok(dashboard.update_filters(update))
}

pub(crate) fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}

pub(crate) fn print_table(snapshot: &DashboardSnapshot, cfg: &Config) {
    println!();
    print!(
        "{}",
        render::data_table(snapshot, cfg.decimals, separator(cfg))
    );
}

pub(crate) fn print_stats(snapshot: &DashboardSnapshot, cfg: &Config) {
    messages::header("Indicadores");
    for (title, value) in render::stat_cards(snapshot, cfg.decimals) {
        messages::card(title, value, color_for_coverage(snapshot.overall.coverage_pct));
    }
}
