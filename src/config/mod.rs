pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::catalog::Category;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fleet-tracker")]
#[command(about = "Scrapes ship history pages and infers each ship's current location")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Roster and ruleset to use when no config file is given
    #[arg(long, value_enum, default_value_t = Category::Fleet)]
    pub category: Category,

    /// Override the output directory
    #[arg(long)]
    pub output_path: Option<String>,

    /// Override the reference year of the status window
    #[arg(long)]
    pub reference_year: Option<i32>,

    /// Override the number of concurrent page fetches
    #[arg(long)]
    pub concurrent_requests: Option<usize>,

    /// Only track these ids (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<String>,

    /// Show what would be scraped without fetching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
