use crate::cli::commands::{apply_filters, print_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::ui::render::describe_filters;

pub fn handle(cmd: &Commands, cfg: &Config, dashboard: &mut Dashboard) -> AppResult<()> {
    if let Commands::List { filters } = cmd {
        let snapshot = apply_filters(dashboard, filters)?;

        println!("{}", describe_filters(dashboard.criteria()));

        if snapshot.filtered.is_empty() {
            println!(
                "No records match the current filters ({} in total).",
                snapshot.total_records
            );
            return Ok(());
        }

        print_table(&snapshot, cfg);
    }
    Ok(())
}
