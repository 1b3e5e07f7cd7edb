//! Command-line interface definitions.

use std::path::PathBuf;

use clap::Parser;

/// trx-tracker - watch TRON wallets and alert on new transactions.
#[derive(Parser, Debug)]
#[command(name = "trx-tracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Run a single sweep and exit
    #[arg(long)]
    pub once: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}
