//! Balance observation types
//!
//! This module defines the record produced by the Mint parser and the
//! header-derived kind of the source file.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One point-in-time balance observation for a single account
///
/// Records from one parse share the same `account` and keep the order of the
/// source file, which Mint writes oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRecord {
    /// Caller-supplied account name
    pub account: String,

    /// Day the balance was observed (the first of the month for Mint exports)
    pub date: NaiveDate,

    /// Net-worth contribution of the account on `date`
    ///
    /// Debt balances are stored negated, so a $500 credit card balance is -500.
    pub value: Decimal,
}

impl ValueRecord {
    pub fn new(account: impl Into<String>, date: NaiveDate, value: Decimal) -> Self {
        ValueRecord {
            account: account.into(),
            date,
            value,
        }
    }

    /// Zero-value copy carrying this record's account and date
    pub fn opening_balance(&self) -> Self {
        ValueRecord {
            account: self.account.clone(),
            date: self.date,
            value: Decimal::ZERO,
        }
    }
}

/// Which Mint trend the export was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Balances add to net worth
    Assets,

    /// Balances reduce net worth and are negated on parse
    Debts,
}

impl SourceKind {
    /// Match the second header field, quotes included
    pub fn from_header_field(field: &str) -> Option<Self> {
        match field {
            "\"Assets\"" => Some(SourceKind::Assets),
            "\"Debts\"" => Some(SourceKind::Debts),
            _ => None,
        }
    }

    /// Apply this kind's sign convention to a parsed amount
    pub fn apply_sign(self, amount: Decimal) -> Decimal {
        match self {
            SourceKind::Assets => amount,
            SourceKind::Debts if amount.is_zero() => Decimal::ZERO,
            SourceKind::Debts => -amount,
        }
    }
}
