//! Error types for the Mint-to-Monarch converter
//!
//! This module defines every error that can occur while converting a Mint
//! export. Messages are written for direct display in the CLI.
//!
//! # Error Categories
//!
//! - **Format Errors**: The input is not a Mint account balance export
//! - **Data Errors**: A data line carries a date or amount that cannot be parsed
//! - **Emitter Errors**: The transaction emitter has no history to anchor on,
//!   or a balance change does not fit in a `Decimal`
//! - **File I/O Errors**: File not found, permission denied, etc.

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for the converter
///
/// Every fallible operation in the library returns this type. Parsing is
/// fail-fast, so the first error aborts the whole conversion and no partial
/// output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Header line does not match `"DATES","Assets"` or `"DATES","Debts"`
    #[error("This doesn't look like a Mint account balance CSV file")]
    InvalidFormat,

    /// The transaction emitter was given zero records
    ///
    /// Without a first record there is no date to anchor the opening balance on.
    #[error("No account history found")]
    EmptyInput,

    /// The change between two balances does not fit in a `Decimal`
    #[error("Arithmetic overflow in balance adjustment dated {date}")]
    ArithmeticOverflow {
        /// Date of the later of the two balances
        date: NaiveDate,
    },

    /// A data line carries a date token that is not a month and year
    #[error("Invalid date '{value}' at line {line}")]
    InvalidDate {
        /// Line number in the source file (header is line 1)
        line: u64,
        /// The raw date token
        value: String,
    },

    /// A data line carries an amount that is not a number
    #[error("Invalid amount '{value}' at line {line}")]
    InvalidAmount {
        /// Line number in the source file (header is line 1)
        line: u64,
        /// The raw amount token
        value: String,
    },

    /// CSV tokenizing or writing failed
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        ConvertError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ConvertError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ConvertError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl ConvertError {
    /// Create an InvalidDate error
    pub fn invalid_date(line: u64, value: &str) -> Self {
        ConvertError::InvalidDate {
            line,
            value: value.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(line: u64, value: &str) -> Self {
        ConvertError::InvalidAmount {
            line,
            value: value.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(date: NaiveDate) -> Self {
        ConvertError::ArithmeticOverflow { date }
    }

    /// Create a Parse error tied to a source line
    pub fn parse_at(line: u64, message: impl Into<String>) -> Self {
        ConvertError::Parse {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        ConvertError::FileNotFound {
            path: path.display().to_string(),
        }
    }
}
