// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, OutputMode};

use clap::error::ErrorKind;
use clap::Parser;

/// One-line usage shown when the positional argument count is wrong
pub const USAGE: &str = "Usage: mint-monarch accountName inputMintFile outputMonarchFile";

/// Parse command-line arguments using clap
///
/// A wrong number of positional arguments prints [`USAGE`] and returns
/// `None` so the program can exit successfully. Any other clap outcome
/// (help, version, invalid `--mode`) is handled by clap itself, which prints
/// and exits.
pub fn parse_args() -> Option<CliArgs> {
    match CliArgs::try_parse() {
        Ok(args) => Some(args),
        Err(e) if is_argument_count_error(&e) => {
            println!("\n{}\n", USAGE);
            None
        }
        Err(e) => e.exit(),
    }
}

/// Whether a clap error comes from too few or too many positional arguments
pub fn is_argument_count_error(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::MissingRequiredArgument | ErrorKind::TooManyValues | ErrorKind::UnknownArgument
    )
}
