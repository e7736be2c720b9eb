//! Balance-adjustment transaction emitter
//!
//! Monarch only accepts transaction streams for manually tracked accounts,
//! so a balance history is replayed as a series of adjustments:
//!
//! 1. A zero-value opening record is placed before the first observation, so
//!    the first balance becomes a transaction of its own.
//! 2. Each adjacent pair of records yields `next.value - prev.value`, dated
//!    on the later record.
//! 3. Zero changes are dropped.
//!
//! Summing the emitted amounts gives back the last observed balance.

use crate::config::TransactionLabels;
use crate::emitter::MonarchEmitter;
use crate::io::monarch_format::{finish, format_amount, format_date, transaction_writer, TransactionRow};
use crate::types::{ConvertError, MonarchTransaction, ValueRecord};
use std::iter;
use tracing::debug;

/// Emitter for Monarch's transactions import
#[derive(Debug, Clone, Default)]
pub struct TransactionEmitter {
    labels: TransactionLabels,
}

impl TransactionEmitter {
    pub fn new(labels: TransactionLabels) -> Self {
        TransactionEmitter { labels }
    }

    /// Synthesize the non-zero adjustments that replay `records`
    ///
    /// The caller's slice is left untouched; the opening record lives only in
    /// the sequence built here.
    ///
    /// # Errors
    ///
    /// * `ConvertError::EmptyInput` when `records` is empty
    /// * `ConvertError::ArithmeticOverflow` when a balance change does not fit
    ///   in a `Decimal`
    pub fn transactions(
        &self,
        records: &[ValueRecord],
    ) -> Result<Vec<MonarchTransaction>, ConvertError> {
        let first = records.first().ok_or(ConvertError::EmptyInput)?;
        let opening = first.opening_balance();

        let history: Vec<&ValueRecord> = iter::once(&opening).chain(records).collect();

        let mut transactions = Vec::with_capacity(records.len());
        for pair in history.windows(2) {
            let t = MonarchTransaction::between(pair[0], pair[1], &self.labels)?;
            if !t.is_noop() {
                transactions.push(t);
            }
        }

        debug!(
            "Synthesized {} balance adjustments from {} records",
            transactions.len(),
            records.len()
        );
        Ok(transactions)
    }
}

impl MonarchEmitter for TransactionEmitter {
    fn emit(&self, records: &[ValueRecord]) -> Result<String, ConvertError> {
        let transactions = self.transactions(records)?;
        let mut writer = transaction_writer()?;

        for t in &transactions {
            writer.serialize(TransactionRow {
                date: format_date(t.date),
                merchant: &t.merchant,
                category: &t.category,
                account: &t.account,
                original_statement: &t.original_statement,
                notes: &t.notes,
                amount: format_amount(t.amount),
            })?;
        }

        finish(writer)
    }
}

/// Render records as a Monarch transactions CSV using the default labels
pub fn to_transaction_csv(records: &[ValueRecord]) -> Result<String, ConvertError> {
    TransactionEmitter::default().emit(records)
}
