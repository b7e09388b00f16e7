//! rVectorSurvey library root.
//! Exposes the filtering/aggregation engine, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::dashboard::Dashboard;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Refs => {
            cli::commands::refs::handle();
            Ok(())
        }
        cmd => {
            let mut dashboard = build_dashboard(cfg)?;
            match cmd {
                Commands::List { .. } => cli::commands::list::handle(cmd, cfg, &mut dashboard),
                Commands::Stats { .. } => cli::commands::stats::handle(cmd, cfg, &mut dashboard),
                Commands::Charts { .. } => cli::commands::charts::handle(cmd, cfg, &mut dashboard),
                Commands::Add { .. } => cli::commands::add::handle(cmd, cfg, &mut dashboard),
                Commands::Import { .. } => cli::commands::import::handle(cmd, cfg, &mut dashboard),
                Commands::Export { .. } => cli::commands::export::handle(cmd, &mut dashboard),
                Commands::Init { .. } | Commands::Config { .. } | Commands::Refs => Ok(()),
            }
        }
    }
}

/// Every invocation starts from a fresh in-memory dashboard.
pub fn build_dashboard(cfg: &Config) -> AppResult<Dashboard> {
    if cfg.seed_sample_data {
        Dashboard::with_sample_data()
    } else {
        Ok(Dashboard::new())
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve and load the config once
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    let cfg = if cli.test {
        Config::default()
    } else {
        Config::load_from(&config_path)?
    };

    // 3️⃣ diagnostics go to stderr
    logging::init(&cfg.log_level);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
