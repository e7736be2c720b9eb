//! Output emitters for Monarch import files
//!
//! This module defines the Strategy pattern for turning parsed balance
//! observations into one of Monarch's two import formats. The format is
//! selected at runtime from the requested `OutputMode`:
//!
//! - **balance**: one snapshot row per observation (account balance history)
//! - **transactions**: balance-adjustment transactions whose running sum
//!   reproduces the history (for manually tracked accounts)

use crate::cli::OutputMode;
use crate::config::TransactionLabels;
use crate::types::{ConvertError, ValueRecord};

pub mod balance;
pub mod transaction;

pub use balance::{to_balance_csv, BalanceEmitter};
pub use transaction::{to_transaction_csv, TransactionEmitter};

/// Emitter trait for Monarch output formats
///
/// Implementations are pure: they read the records and return the complete
/// output text. Record order is preserved and never re-sorted.
pub trait MonarchEmitter: Send + Sync {
    /// Render records as a Monarch CSV document
    ///
    /// # Arguments
    ///
    /// * `records` - Balance observations in chronological order
    ///
    /// # Returns
    ///
    /// * `Ok(String)` with the full CSV text, lines separated by `\n`
    /// * `Err(ConvertError)` if the records cannot be rendered in this format
    fn emit(&self, records: &[ValueRecord]) -> Result<String, ConvertError>;
}

/// Create an emitter for the requested output mode
///
/// # Arguments
///
/// * `mode` - Output format to produce
/// * `labels` - Labels for synthesized transactions (ignored for balance output)
///
/// # Returns
///
/// A boxed trait object implementing the MonarchEmitter trait
pub fn create_emitter(mode: OutputMode, labels: TransactionLabels) -> Box<dyn MonarchEmitter> {
    match mode {
        OutputMode::Balance => Box::new(BalanceEmitter),
        OutputMode::Transactions => Box::new(TransactionEmitter::new(labels)),
    }
}
