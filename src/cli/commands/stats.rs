use crate::cli::commands::{apply_filters, print_stats};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::ui::render::describe_filters;

pub fn handle(cmd: &Commands, cfg: &Config, dashboard: &mut Dashboard) -> AppResult<()> {
    if let Commands::Stats { filters } = cmd {
        let snapshot = apply_filters(dashboard, filters)?;

        println!("{}", describe_filters(dashboard.criteria()));
        println!(
            "Registros: {} de {}",
            snapshot.filtered_count(),
            snapshot.total_records
        );
        print_stats(&snapshot, cfg);
    }
    Ok(())
}
