//! Conversion pipeline
//!
//! Ties the Mint parser to a Monarch emitter. `convert_str` is the pure
//! text-to-text entry point for any front end; `convert_file` adds the file
//! handling the CLI needs.

use crate::cli::OutputMode;
use crate::config::TransactionLabels;
use crate::emitter::create_emitter;
use crate::io::mint_format::parse_mint_csv;
use crate::types::ConvertError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of a file conversion, used for the CLI confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// Number of balance observations read from the Mint file
    pub records: usize,
    /// Where the Monarch file was written
    pub output_path: PathBuf,
    pub mode: OutputMode,
}

/// Convert Mint export text into Monarch import text
///
/// # Arguments
///
/// * `account_name` - Account name written into every output row
/// * `csv_text` - Contents of the Mint export
/// * `mode` - Which Monarch format to produce
/// * `labels` - Labels for synthesized transactions
///
/// # Errors
///
/// Any parse error from the Mint file. In transactions mode,
/// `ConvertError::EmptyInput` for a file without data lines and
/// `ConvertError::ArithmeticOverflow` for a balance change too large to
/// represent.
pub fn convert_str(
    account_name: &str,
    csv_text: &str,
    mode: OutputMode,
    labels: &TransactionLabels,
) -> Result<String, ConvertError> {
    run_pipeline(account_name, csv_text, mode, labels).map(|(text, _)| text)
}

/// Convert a Mint export file into a Monarch import file
///
/// If `output` is an existing directory, the file is written inside it under
/// the name from [`default_output_file_name`].
///
/// # Errors
///
/// * `ConvertError::FileNotFound` if `input` does not exist
/// * `ConvertError::Io` for any other read or write failure
/// * Any error from [`convert_str`]; nothing is written in that case
pub fn convert_file(
    account_name: &str,
    input: &Path,
    output: &Path,
    mode: OutputMode,
    labels: &TransactionLabels,
) -> Result<ConversionSummary, ConvertError> {
    let csv_text = fs::read_to_string(input).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConvertError::file_not_found(input),
        _ => ConvertError::from(e),
    })?;

    let (monarch_text, records) = run_pipeline(account_name, &csv_text, mode, labels)?;

    let output_path = resolve_output_path(output, account_name, mode);
    fs::write(&output_path, monarch_text)?;

    info!(
        "Converted {} records from {} into {:?} file {}",
        records,
        input.display(),
        mode,
        output_path.display()
    );

    Ok(ConversionSummary {
        records,
        output_path,
        mode,
    })
}

/// File name offered for a converted account, e.g. `Monarch-Checking.csv`
///
/// Transaction output is suffixed: `Monarch-Checking-Transactions.csv`.
pub fn default_output_file_name(account_name: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Balance => format!("Monarch-{}.csv", account_name),
        OutputMode::Transactions => format!("Monarch-{}-Transactions.csv", account_name),
    }
}

/// Parse then emit, returning the output text and the number of records read
fn run_pipeline(
    account_name: &str,
    csv_text: &str,
    mode: OutputMode,
    labels: &TransactionLabels,
) -> Result<(String, usize), ConvertError> {
    let records = parse_mint_csv(account_name, csv_text)?;
    let text = create_emitter(mode, labels.clone()).emit(&records)?;
    Ok((text, records.len()))
}

fn resolve_output_path(output: &Path, account_name: &str, mode: OutputMode) -> PathBuf {
    if output.is_dir() {
        output.join(default_output_file_name(account_name, mode))
    } else {
        output.to_path_buf()
    }
}
