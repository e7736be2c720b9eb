//! Balance history emitter
//!
//! Writes one quoted `"Date","Amount","Account Name"` row per observation.
//! No sorting, deduplication or gap filling is done.

use crate::emitter::MonarchEmitter;
use crate::io::monarch_format::{balance_writer, finish, format_amount, format_date, BalanceRow};
use crate::types::{ConvertError, ValueRecord};
use tracing::debug;

/// Emitter for Monarch's account balance history import
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceEmitter;

impl MonarchEmitter for BalanceEmitter {
    fn emit(&self, records: &[ValueRecord]) -> Result<String, ConvertError> {
        let mut writer = balance_writer(Vec::new());

        for record in records {
            writer.serialize(BalanceRow {
                date: format_date(record.date),
                amount: format_amount(record.value),
                account: &record.account,
            })?;
        }

        debug!("Wrote {} balance rows", records.len());
        finish(writer)
    }
}

/// Render records as a Monarch balance history CSV
pub fn to_balance_csv(records: &[ValueRecord]) -> Result<String, ConvertError> {
    BalanceEmitter.emit(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn record(account: &str, y: i32, m: u32, value: Decimal) -> ValueRecord {
        ValueRecord::new(account, NaiveDate::from_ymd_opt(y, m, 1).unwrap(), value)
    }

    #[test]
    fn test_balance_concrete_scenario() {
        let records = vec![
            record("Checking", 2023, 1, Decimal::new(10000, 2)),
            record("Checking", 2023, 2, Decimal::new(15000, 2)),
        ];

        let output = to_balance_csv(&records).unwrap();

        assert_eq!(
            output,
            "\"Date\", \"Amount\", \"Account Name\"\n\
             \"2023-1-1\",\"100.00\",\"Checking\"\n\
             \"2023-2-1\",\"150.00\",\"Checking\""
        );
    }

    #[test]
    fn test_balance_pads_to_two_decimals() {
        let records = vec![record("Savings", 2021, 11, Decimal::new(12345, 1))];

        let output = to_balance_csv(&records).unwrap();

        assert!(output.ends_with("\"2021-11-1\",\"1234.50\",\"Savings\""));
    }

    #[test]
    fn test_balance_preserves_order_and_duplicates() {
        let records = vec![
            record("Loan", 2020, 5, Decimal::new(-300, 0)),
            record("Loan", 2020, 3, Decimal::new(-100, 0)),
            record("Loan", 2020, 3, Decimal::new(-100, 0)),
        ];

        let output = to_balance_csv(&records).unwrap();
        let rows: Vec<&str> = output.lines().skip(1).collect();

        assert_eq!(
            rows,
            vec![
                "\"2020-5-1\",\"-300.00\",\"Loan\"",
                "\"2020-3-1\",\"-100.00\",\"Loan\"",
                "\"2020-3-1\",\"-100.00\",\"Loan\"",
            ]
        );
    }

    #[test]
    fn test_balance_empty_records_is_header_only() {
        assert_eq!(
            to_balance_csv(&[]).unwrap(),
            "\"Date\", \"Amount\", \"Account Name\""
        );
    }

    #[test]
    fn test_balance_escapes_quotes_in_account_name() {
        let records = vec![record("Mom's \"Fun\" Fund", 2022, 7, Decimal::ONE)];

        let output = to_balance_csv(&records).unwrap();

        assert!(output.ends_with("\"2022-7-1\",\"1.00\",\"Mom's \"\"Fun\"\" Fund\""));
    }
}
