use crate::cli::commands::print_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, dashboard: &mut Dashboard) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        info("Processing file...");

        let records = ImportLogic::records_from_file(Path::new(file))?;
        let snapshot = dashboard.import(records);

        success(format!("File \"{file}\" imported."));
        print_table(&snapshot, cfg);
    }
    Ok(())
}
