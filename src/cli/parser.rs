use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::{ActivityCycle, EpiWeek, FilterUpdate, WorkModality};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rVectorSurvey
#[derive(Parser)]
#[command(
    name = "rvectorsurvey",
    version = env!("CARGO_PKG_VERSION"),
    about = "Filter and summarize vector-control field survey records",
    long_about = None
)]
pub struct Cli {
    /// Use a specific configuration file instead of ~/.rvectorsurvey/rvectorsurvey.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (ignore any configuration file)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The four dashboard filters. Only the flags given on the command line
/// are applied; the others stay unset.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "week", help = "Epidemiological week (1-53)")]
    pub week: Option<u8>,

    #[arg(long = "modality", help = "Work modality: LI, LI+T, PE, TR")]
    pub modality: Option<String>,

    #[arg(long = "locality", help = "Case-insensitive part of the locality name")]
    pub locality: Option<String>,

    #[arg(long = "cycle", help = "Activity cycle (1-6 or 'Ciclo 01')")]
    pub cycle: Option<String>,
}

impl FilterArgs {
    pub fn to_update(&self) -> AppResult<FilterUpdate> {
        let mut update = FilterUpdate::default();

        if let Some(w) = self.week {
            update = update.week(Some(EpiWeek::new(w)?));
        }

        if let Some(m) = &self.modality {
            let modality =
                WorkModality::parse_input(m).ok_or_else(|| AppError::InvalidModality(m.clone()))?;
            update = update.modality(Some(modality));
        }

        if let Some(l) = &self.locality {
            update = update.locality(l.trim());
        }

        if let Some(c) = &self.cycle {
            let cycle = ActivityCycle::parse_input(c).ok_or_else(|| AppError::InvalidCycle(c.clone()))?;
            update = update.cycle(Some(cycle));
        }

        Ok(update)
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
    #[default]
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Show the filtered data table
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the overall percentage cards
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show chart data (per locality, per category, per week)
    Charts {
        #[arg(long, value_enum, default_value = "all")]
        kind: ChartKind,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Add a survey record (manual entry)
    Add {
        #[arg(long = "locality")]
        locality: String,

        #[arg(long = "total", help = "Total properties (> 0)")]
        total: u32,

        #[arg(long = "worked", help = "Worked properties (<= total)")]
        worked: u32,

        #[arg(long = "informed", default_value_t = 0)]
        informed: u32,

        #[arg(long = "closed", default_value_t = 0)]
        closed: u32,

        #[arg(long = "recovered", default_value_t = 0)]
        recovered: u32,

        /// Collection date (YYYY-MM-DD)
        #[arg(long = "date")]
        date: String,

        #[arg(long = "modality", help = "Work modality: LI, LI+T, PE, TR")]
        modality: String,

        #[arg(long = "week", help = "Epidemiological week (1-53)")]
        week: u8,

        #[arg(long = "cycle", help = "Activity cycle (1-6 or 'Ciclo 01')")]
        cycle: String,
    },

    /// Import a spreadsheet or PDF file (.xlsx / .pdf)
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Export the filtered data table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the reference lists (localities, modalities, cycles)
    Refs,
}
