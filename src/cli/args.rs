use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

/// Convert a Mint account balance history CSV into a Monarch import CSV
#[derive(Parser, Debug)]
#[command(name = "mint-monarch", version)]
#[command(about = "Convert a Mint account balance history CSV into a Monarch import CSV", long_about = None)]
pub struct CliArgs {
    /// Account name written into every Monarch row
    #[arg(value_name = "ACCOUNT_NAME", help = "Name of the account in Monarch")]
    pub account_name: String,

    /// Mint export to read
    #[arg(value_name = "INPUT", help = "Path to the Mint trends CSV file")]
    pub input_file: PathBuf,

    /// Monarch file to write
    #[arg(
        value_name = "OUTPUT",
        help = "Path of the Monarch CSV file to write (or a directory to write into)"
    )]
    pub output_file: PathBuf,

    /// Monarch import format to produce
    #[arg(
        long = "mode",
        value_name = "MODE",
        default_value = "balance",
        help = "Output format: 'balance' for balance history or 'transactions' for manual accounts"
    )]
    pub mode: OutputMode,

    /// Log parsing and conversion details to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Monarch import formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Account balance history, one row per observation
    Balance,
    /// Balance-adjustment transactions, for manually tracked accounts
    Transactions,
}

impl CliArgs {
    /// Maximum level for the stderr log subscriber
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}
