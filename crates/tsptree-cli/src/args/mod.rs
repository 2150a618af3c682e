// NOTE: Command Organization Rationale
//
// Why `show` and `check` (not one command with flags)?
// - `show` renders; its output is meant for humans or for piping JSON onward
// - `check` diagnoses input; its exit status is meant for scripts (`--strict`)

mod commands;

pub use commands::*;

use crate::types::{ColorChoice, LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "tsptree")]
#[command(about = "Print trace-server entry trees as indented text or tables", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Config file (default: $TSPTREE_CONFIG or the user config dir)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Colorize tree guides [default: from config, else auto]")]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
