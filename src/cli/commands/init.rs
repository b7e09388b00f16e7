use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if path.exists() && !*force {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        Config::init_file(path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
