//! Synthesized Monarch transaction type
//!
//! A MonarchTransaction moves an account's running balance from one observed
//! value to the next. It only exists while the transaction emitter runs.

use super::error::ConvertError;
use super::record::ValueRecord;
use crate::config::TransactionLabels;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Balance-adjustment transaction between two consecutive observations
#[derive(Debug, Clone, PartialEq)]
pub struct MonarchTransaction {
    /// Date of the later observation
    pub date: NaiveDate,

    /// Fixed merchant label identifying the row as synthetic
    pub merchant: String,

    pub category: String,

    /// Account of the later observation
    pub account: String,

    pub original_statement: String,

    /// Always empty
    pub notes: String,

    /// Signed change `end.value - start.value`
    pub amount: Decimal,
}

impl MonarchTransaction {
    /// Build the adjustment that takes the balance from `start` to `end`
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::ArithmeticOverflow` if the change does not fit in
    /// a `Decimal`.
    pub fn between(
        start: &ValueRecord,
        end: &ValueRecord,
        labels: &TransactionLabels,
    ) -> Result<Self, ConvertError> {
        let amount = end
            .value
            .checked_sub(start.value)
            .ok_or_else(|| ConvertError::arithmetic_overflow(end.date))?;

        Ok(MonarchTransaction {
            date: end.date,
            merchant: labels.merchant.clone(),
            category: labels.category.clone(),
            account: end.account.clone(),
            original_statement: labels.original_statement.clone(),
            notes: String::new(),
            amount,
        })
    }

    /// A zero adjustment carries no information and is never emitted
    pub fn is_noop(&self) -> bool {
        self.amount.is_zero()
    }
}
