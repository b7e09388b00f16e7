use crate::cli::commands::{print_stats, print_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::{AppError, AppResult};
use crate::models::reference::canonical_locality;
use crate::models::{ActivityCycle, EpiWeek, RecordInput, WorkModality};
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Manual entry of one survey record.
pub fn handle(cmd: &Commands, cfg: &Config, dashboard: &mut Dashboard) -> AppResult<()> {
    if let Commands::Add {
        locality,
        total,
        worked,
        informed,
        closed,
        recovered,
        date,
        modality,
        week,
        cycle,
    } = cmd
    {
        //
        // 1. Parse the typed fields
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let modality = WorkModality::parse_input(modality)
            .ok_or_else(|| AppError::InvalidModality(modality.to_string()))?;

        let week = EpiWeek::new(*week)?;

        let cycle =
            ActivityCycle::parse_input(cycle).ok_or_else(|| AppError::InvalidCycle(cycle.to_string()))?;

        // Known localities get their canonical spelling; others are kept as typed.
        let locality = match canonical_locality(locality) {
            Some(name) => name.to_string(),
            None => {
                warning(format!("'{}' is not in the locality reference list.", locality.trim()));
                locality.trim().to_string()
            }
        };

        //
        // 2. Build the record (id / created_at are assigned by the store)
        //
        let input = RecordInput::manual(
            locality.as_str(),
            *total,
            *worked,
            *informed,
            *closed,
            *recovered,
            d,
            modality,
            week,
            cycle,
        );

        //
        // 3. Validate + append, then show the refreshed view
        //
        let snapshot = dashboard.add(input)?;
        success(format!("Record for '{locality}' added."));

        print_table(&snapshot, cfg);
        print_stats(&snapshot, cfg);
    }

    Ok(())
}
