//! Fixed labels written into synthesized Monarch transactions
//!
//! Monarch uses the merchant and category columns for grouping, so every
//! balance-adjustment row carries the same recognisable labels.

/// Merchant written on every balance-adjustment row
pub const DEFAULT_MERCHANT: &str = "Mint-to-Monarch";

/// Category written on every balance-adjustment row
pub const DEFAULT_CATEGORY: &str = "Balance Adjustments";

/// Original statement written on every balance-adjustment row
pub const DEFAULT_ORIGINAL_STATEMENT: &str = "Balance Adjustments";

/// Labels used by the transaction emitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLabels {
    pub merchant: String,
    pub category: String,
    pub original_statement: String,
}

impl Default for TransactionLabels {
    fn default() -> Self {
        TransactionLabels {
            merchant: DEFAULT_MERCHANT.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            original_statement: DEFAULT_ORIGINAL_STATEMENT.to_string(),
        }
    }
}
