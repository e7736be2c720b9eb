//! Mint-to-Monarch Converter Library
//! # Overview
//!
//! This library converts a Mint account balance history export into a CSV file
//! that Monarch can import, either as balance history or as synthesized
//! transactions.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (ValueRecord, MonarchTransaction, ConvertError)
//! - [`cli`] - CLI arguments parsing
//! - [`config`] - Fixed labels for synthesized transactions
//! - [`io`] - Mint parsing and Monarch formatting helpers
//! - [`emitter`] - Pluggable output formats:
//!   - [`emitter::balance`] - One balance snapshot row per observation
//!   - [`emitter::transaction`] - Balance-adjustment transactions
//! - [`convert`] - The parse-then-emit pipeline, for text and for files
//!
//! # Output Modes
//!
//! - **Balance**: Monarch's account balance history import
//! - **Transactions**: Monarch's transaction import, for manually tracked
//!   accounts; the running sum of the transactions reproduces the history
//!
//! # Sign Convention
//!
//! Values are net-worth contributions: a Mint "Debts" export is negated so
//! that owing $500 is stored as -500.

// Module declarations
pub mod cli;
pub mod config;
pub mod convert;
pub mod emitter;
pub mod io;
pub mod types;

pub use cli::OutputMode;
pub use config::TransactionLabels;
pub use convert::{convert_file, convert_str, default_output_file_name, ConversionSummary};
pub use emitter::{create_emitter, to_balance_csv, to_transaction_csv, MonarchEmitter};
pub use io::parse_mint_csv;
pub use types::{ConvertError, MonarchTransaction, SourceKind, ValueRecord};
