use crate::cli::commands::apply_filters;
use crate::cli::parser::Commands;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, dashboard: &mut Dashboard) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        filters,
    } = cmd
    {
        let snapshot = apply_filters(dashboard, filters)?;
        ExportLogic::export(&snapshot, *format, file, *force)?;
    }
    Ok(())
}
