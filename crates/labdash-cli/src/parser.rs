//! Main CLI parser and top-level argument handling.
//!
//! Global options map one-to-one onto [`Settings`](labdash_core::Settings)
//! fields. Each can also come from a `LABDASH_*` environment variable
//! (or a `.env` file loaded before parsing).

use clap::Parser;
use std::path::PathBuf;

use labdash_core::RuntimeMode;

use crate::commands::Commands;

/// Manage lab classes and run ESXi automation scripts.
#[derive(Parser, Debug)]
#[command(name = "labdash")]
#[command(about = "Manage lab classes and run ESXi automation scripts")]
#[command(version)]
pub struct Cli {
    /// Run against canned data and echo scripts instead of running them
    #[arg(long, global = true, env = "LABDASH_MODE", default_value = "mock")]
    pub mode: RuntimeMode,

    /// Class list JSON document (production mode)
    #[arg(long = "data-file", global = true, env = "LABDASH_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Directory containing the automation scripts
    #[arg(long = "script-dir", global = true, env = "LABDASH_SCRIPT_DIR")]
    pub script_dir: Option<PathBuf>,

    /// Script interpreter binary
    #[arg(long, global = true, env = "LABDASH_INTERPRETER")]
    pub interpreter: Option<String>,

    /// Kill scripts that run longer than this many seconds
    #[arg(long = "script-timeout", global = true, env = "LABDASH_SCRIPT_TIMEOUT")]
    pub script_timeout: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
