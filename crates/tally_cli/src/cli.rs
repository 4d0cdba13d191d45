use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(about = "Tally - a persistent counter with click feedback", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// SQLite file holding the counter (overrides TALLY_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Keep state in memory only; nothing survives the process
    #[arg(long, global = true, conflicts_with = "db")]
    pub memory: bool,

    /// Absolute directory for rolling log files (overrides TALLY_LOG_DIR)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides TALLY_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print the render surface as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not ring the terminal bell on clicks
    #[arg(long, global = true)]
    pub no_bell: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the current count (default)
    Show,
    /// Increase the count by one
    Inc,
    /// Decrease the count by one, never below zero
    Dec,
    /// Set the count back to zero
    Reset,
    /// Turn the click sound on or off
    ToggleSound,
    /// Read actions from stdin until `q`
    Interactive,
}
