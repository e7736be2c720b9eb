//! Mint-to-Monarch CLI
//!
//! Command-line interface for converting Mint account history exports.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- Checking trends.csv monarch.csv
//! cargo run -- --mode transactions "Cash Box" trends.csv monarch.csv
//! cargo run -- --verbose Checking trends.csv out_dir/
//! ```
//!
//! The program reads the Mint export, converts it with the selected output
//! mode and writes the Monarch file. A wrong number of arguments prints a
//! usage line and exits without error.
//!
//! # Exit Codes
//!
//! - 0: Success, or usage printed
//! - 1: Error (file not found, not a Mint export, malformed line, etc.)
//! - 2: Invalid option value (reported by clap)

use mint_monarch::cli;
use mint_monarch::config::TransactionLabels;
use mint_monarch::convert::convert_file;
use std::process;

fn main() {
    let Some(args) = cli::parse_args() else {
        return;
    };

    // Logs go to stderr; stdout only carries the confirmation
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let labels = TransactionLabels::default();
    match convert_file(
        &args.account_name,
        &args.input_file,
        &args.output_file,
        args.mode,
        &labels,
    ) {
        Ok(summary) => {
            println!(
                "\nWrote Monarch csv file to {}\n",
                summary.output_path.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
