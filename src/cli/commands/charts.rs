use crate::cli::commands::{apply_filters, separator};
use crate::cli::parser::{ChartKind, Commands};
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::{bar_chart, describe_filters, line_chart, pie_chart};

pub fn handle(cmd: &Commands, cfg: &Config, dashboard: &mut Dashboard) -> AppResult<()> {
    if let Commands::Charts { kind, filters } = cmd {
        let snapshot = apply_filters(dashboard, filters)?;
        let sep = separator(cfg);

        println!("{}", describe_filters(dashboard.criteria()));

        if matches!(kind, ChartKind::Bar | ChartKind::All) {
            header("Percentuais por Localidade (%)");
            print!("{}", bar_chart(&snapshot, cfg.decimals, sep));
        }

        if matches!(kind, ChartKind::Pie | ChartKind::All) {
            header("Distribuição de Imóveis");
            print!("{}", pie_chart(&snapshot, sep));
        }

        if matches!(kind, ChartKind::Line | ChartKind::All) {
            header("Cobertura por Semana Epidemiológica (%)");
            print!("{}", line_chart(&snapshot, cfg.decimals, sep));
        }
    }
    Ok(())
}
