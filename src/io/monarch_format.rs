//! Monarch CSV format handling
//!
//! This module centralizes the Monarch output conventions shared by both
//! emitters:
//! - Date formatting (`Y-M-D` without zero padding)
//! - Amount formatting (exactly two decimals)
//! - Row structures for serialization
//! - CSV writer configuration and finishing
//!
//! Output files use `\n` between lines and carry no trailing newline.

use crate::types::ConvertError;
use chrono::{Datelike, NaiveDate};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Header of the balance history import, written verbatim
pub const BALANCE_HEADER: &str = "\"Date\", \"Amount\", \"Account Name\"";

/// Header of the transactions import
///
/// Data rows stop after `Amount`; Monarch accepts the missing `Tags` column.
pub const TRANSACTION_HEADER: [&str; 8] = [
    "Date",
    "Merchant",
    "Category",
    "Account",
    "Original Statement",
    "Notes",
    "Amount",
    "Tags",
];

/// One row of the balance history import
#[derive(Debug, Serialize)]
pub struct BalanceRow<'a> {
    pub date: String,
    pub amount: String,
    pub account: &'a str,
}

/// One row of the transactions import
///
/// Seven columns: the header's trailing `Tags` column is left out of data
/// rows because synthesized adjustments never carry tags.
#[derive(Debug, Serialize)]
pub struct TransactionRow<'a> {
    pub date: String,
    pub merchant: &'a str,
    pub category: &'a str,
    pub account: &'a str,
    pub original_statement: &'a str,
    pub notes: &'a str,
    pub amount: String,
}

/// Format a date as Monarch expects it: `2023-1-1`, not `2023-01-01`
pub fn format_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Format an amount with exactly two decimals, rounding half away from zero
///
/// Amounts that round to zero print as `0.00`, never `-0.00`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}

/// Writer for the balance import: every field quoted
///
/// The header is written into `buffer` beforehand because its `", "`
/// separators cannot be produced by a CSV writer.
pub fn balance_writer(mut buffer: Vec<u8>) -> Writer<Vec<u8>> {
    buffer.extend_from_slice(BALANCE_HEADER.as_bytes());
    buffer.push(b'\n');

    WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer)
}

/// Writer for the transactions import: fields quoted only when needed
///
/// Flexible because the header has one more column than the data rows.
pub fn transaction_writer() -> Result<Writer<Vec<u8>>, ConvertError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(TRANSACTION_HEADER)?;
    Ok(writer)
}

/// Flush a writer and return its contents without the final line terminator
pub fn finish(writer: Writer<Vec<u8>>) -> Result<String, ConvertError> {
    let bytes = writer.into_inner().map_err(|e| ConvertError::Io {
        message: format!("Failed to flush output: {}", e),
    })?;

    let mut text = String::from_utf8(bytes).map_err(|e| ConvertError::Io {
        message: format!("Output is not valid UTF-8: {}", e),
    })?;

    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
