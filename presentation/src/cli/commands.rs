//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the voting report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full report: agenda item, session window, cast outcomes, tally
    Full,
    /// Only the final tally
    Tally,
    /// JSON tally
    Json,
}

/// CLI arguments for plenum
#[derive(Parser, Debug)]
#[command(name = "plenum")]
#[command(author, version, about = "Assembly voting - sessions, exactly-once votes, tallies")]
#[command(long_about = r#"
Plenum runs an assembly vote end to end against the in-process service:

1. Register the agenda item
2. Open its voting session (one session per item, ever)
3. Simulated voters cast YES/NO votes concurrently; eligibility is checked
   against the configured verifier and cached per voter
4. Tally the accepted votes and report the session status

Configuration files are loaded from (in priority order):
1. PLENUM_* environment variables
2. --config <path>     Explicit config file
3. ./plenum.toml       Project-level config
4. ~/.config/plenum/config.toml   Global config

Example:
  plenum "Pauta A"
  plenum "Budget 2026" --voters 50 --duration 2
  plenum "Quick poll" --output json --quiet
"#)]
pub struct Cli {
    /// Title of the agenda item to put to the vote
    pub title: Option<String>,

    /// Optional description of the agenda item
    #[arg(short, long)]
    pub description: Option<String>,

    /// Number of simulated voters casting concurrently
    #[arg(long, default_value_t = 8)]
    pub voters: u32,

    /// Session window length in minutes (defaults to the configured value)
    #[arg(long, value_name = "MINUTES")]
    pub duration: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
