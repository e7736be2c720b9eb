//! Mint account balance export parsing
//!
//! Mint's "Trends → Over time" export is a two-column CSV:
//!
//! ```text
//! "DATES","Assets"
//! "Jan 2023","$1,234.56"
//! "Feb 2023","$1,300.00"
//! ```
//!
//! The second header field is `"Debts"` for liability accounts, in which case
//! every amount is negated. Dates only carry a month and year; each record is
//! pinned to the first day of that month.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{ConvertError, SourceKind, ValueRecord};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

/// Literal first header field, quotes included
const DATES_HEADER: &str = "\"DATES\"";

/// Lines consumed before the first data line
const HEADER_LINES: u64 = 1;

/// Day prepended to Mint's month-and-year tokens
const SYNTHETIC_DAY: &str = "1 ";

/// Accepted shapes of `1 <month> <year>`
const DATE_FORMATS: [&str; 2] = ["%d %b %Y", "%d %B %Y"];

/// Parse a Mint account balance export into balance observations
///
/// # Arguments
///
/// * `account_name` - Name written into every record
/// * `csv_text` - Entire contents of the Mint export
///
/// # Returns
///
/// One `ValueRecord` per non-empty data line, in file order.
///
/// # Errors
///
/// * `ConvertError::InvalidFormat` if the header is not a Mint balance header
/// * `ConvertError::Parse` if a data line does not have exactly two fields
/// * `ConvertError::InvalidDate` / `ConvertError::InvalidAmount` for the first
///   unparseable token; no partial result is returned
pub fn parse_mint_csv(account_name: &str, csv_text: &str) -> Result<Vec<ValueRecord>, ConvertError> {
    let (header, body) = csv_text.split_once('\n').unwrap_or((csv_text, ""));
    let kind = detect_source_kind(header)?;
    debug!("Detected Mint {:?} export", kind);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| ConvertError::Parse {
            line: e.position().map(|pos| pos.line() + HEADER_LINES),
            message: e.to_string(),
        })?;

        if row.iter().all(str::is_empty) {
            continue;
        }

        let line = row.position().map(|pos| pos.line()).unwrap_or_default() + HEADER_LINES;
        records.push(convert_row(account_name, kind, &row, line)?);
    }

    debug!(
        "Parsed {} balance records for account '{}'",
        records.len(),
        account_name
    );
    Ok(records)
}

/// Check the header line and read which trend it was exported from
///
/// A UTF-8 byte order mark and a trailing carriage return are tolerated.
pub fn detect_source_kind(header: &str) -> Result<SourceKind, ConvertError> {
    let header = header.trim_start_matches('\u{feff}').trim_end_matches('\r');
    let fields: Vec<&str> = header.split(',').collect();

    match fields.as_slice() {
        [dates, kind] if *dates == DATES_HEADER => {
            SourceKind::from_header_field(kind).ok_or(ConvertError::InvalidFormat)
        }
        _ => Err(ConvertError::InvalidFormat),
    }
}

/// Turn a Mint month token such as `Jan 2023` into the first day of that month
pub fn parse_partial_date(token: &str) -> Option<NaiveDate> {
    let candidate = format!("{}{}", SYNTHETIC_DAY, token.trim());

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&candidate, fmt).ok())
}

/// Parse a US-style amount such as `$1,234.56` or `-$20.00`
pub fn parse_amount(token: &str) -> Option<Decimal> {
    let cleaned: String = token
        .trim()
        .trim_matches('"')
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    Decimal::from_str(cleaned.trim()).ok()
}

fn convert_row(
    account_name: &str,
    kind: SourceKind,
    row: &StringRecord,
    line: u64,
) -> Result<ValueRecord, ConvertError> {
    if row.len() != 2 {
        return Err(ConvertError::parse_at(
            line,
            format!("expected 2 fields, found {}", row.len()),
        ));
    }

    let date_token = &row[0];
    let amount_token = &row[1];

    let date =
        parse_partial_date(date_token).ok_or_else(|| ConvertError::invalid_date(line, date_token))?;
    let amount =
        parse_amount(amount_token).ok_or_else(|| ConvertError::invalid_amount(line, amount_token))?;

    Ok(ValueRecord::new(account_name, date, kind.apply_sign(amount)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_concrete_scenario() {
        let csv = "\"DATES\",\"Assets\"\n\"Jan 2023\",\"$100.00\"\n\"Feb 2023\",\"$150.00\"\n";

        let records = parse_mint_csv("Checking", csv).unwrap();

        assert_eq!(
            records,
            vec![
                ValueRecord::new("Checking", ymd(2023, 1, 1), Decimal::new(10000, 2)),
                ValueRecord::new("Checking", ymd(2023, 2, 1), Decimal::new(15000, 2)),
            ]
        );
    }

    #[test]
    fn test_parse_keeps_file_order_and_account() {
        let csv = "\"DATES\",\"Assets\"\n\
            \"Mar 2022\",\"$3.00\"\n\
            \"Jan 2022\",\"$1.00\"\n\
            \"Feb 2022\",\"$2.00\"\n";

        let records = parse_mint_csv("Brokerage", csv).unwrap();

        let months: Vec<u32> = records.iter().map(|r| chrono::Datelike::month(&r.date)).collect();
        assert_eq!(months, vec![3, 1, 2]);
        assert!(records.iter().all(|r| r.account == "Brokerage"));
    }

    #[test]
    fn test_parse_debts_inverts_sign() {
        let body = "\"Jan 2023\",\"$1,500.25\"\n\"Feb 2023\",\"$0.00\"\n\"Mar 2023\",\"-$20.00\"\n";
        let assets = parse_mint_csv("Card", &format!("\"DATES\",\"Assets\"\n{}", body)).unwrap();
        let debts = parse_mint_csv("Card", &format!("\"DATES\",\"Debts\"\n{}", body)).unwrap();

        assert_eq!(assets.len(), debts.len());
        for (asset, debt) in assets.iter().zip(&debts) {
            assert_eq!(debt.value, -asset.value);
            assert_eq!(debt.date, asset.date);
        }
        assert_eq!(debts[0].value, Decimal::new(-150025, 2));
        assert!(!debts[1].value.is_sign_negative());
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let csv = "\"DATES\",\"Assets\"\n\n\"Jan 2023\",\"$5.00\"\n\n\n\"Feb 2023\",\"$6.00\"\n\n";

        let records = parse_mint_csv("Checking", csv).unwrap();

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_header_only() {
        assert!(parse_mint_csv("Checking", "\"DATES\",\"Assets\"").unwrap().is_empty());
        assert!(parse_mint_csv("Checking", "\"DATES\",\"Debts\"\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let csv = "\"DATES\",\"Assets\"\r\n\"Jan 2023\",\"$1,000.00\"\r\n\"Feb 2023\",\"$900.00\"\r\n";

        let records = parse_mint_csv("Checking", csv).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value, Decimal::new(100000, 2));
        assert_eq!(records[1].value, Decimal::new(90000, 2));
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank_line("\n\"Jan 2023\",\"$1.00\"")]
    #[case::unquoted("DATES,Assets\n")]
    #[case::wrong_kind("\"DATES\",\"Income\"\n")]
    #[case::lowercase("\"dates\",\"assets\"\n")]
    #[case::three_columns("\"DATES\",\"Assets\",\"Debts\"\n")]
    #[case::one_column("\"DATES\"\n")]
    #[case::transaction_export("\"Date\",\"Description\",\"Amount\"\n\"1/02/2023\",\"Coffee\",\"4.50\"\n")]
    #[case::spaced("\"DATES\", \"Assets\"\n")]
    fn test_parse_rejects_bad_header(#[case] csv: &str) {
        assert_eq!(parse_mint_csv("Checking", csv), Err(ConvertError::InvalidFormat));
    }

    #[test]
    fn test_parse_rejects_header_before_reading_data() {
        // Data would fail too, but the header is reported first
        let csv = "\"DATES\",\"Other\"\n\"not a date\",\"nope\"\n";
        assert_eq!(parse_mint_csv("Checking", csv), Err(ConvertError::InvalidFormat));
    }

    #[test]
    fn test_parse_fails_fast_on_bad_date() {
        let csv = "\"DATES\",\"Assets\"\n\"Jan 2023\",\"$1.00\"\n\"Smarch 2023\",\"$2.00\"\n\"Mar 2023\",\"$3.00\"\n";

        let result = parse_mint_csv("Checking", csv);

        assert_eq!(result, Err(ConvertError::invalid_date(3, "Smarch 2023")));
    }

    #[test]
    fn test_parse_fails_fast_on_bad_amount() {
        let csv = "\"DATES\",\"Assets\"\n\"Jan 2023\",\"$abc\"\n";

        let result = parse_mint_csv("Checking", csv);

        assert_eq!(result, Err(ConvertError::invalid_amount(2, "$abc")));
    }

    #[rstest]
    #[case::missing_amount("\"DATES\",\"Assets\"\n\"Jan 2023\"\n", 2)]
    #[case::extra_field("\"DATES\",\"Assets\"\n\"Jan 2023\",\"$1.00\"\n\"Feb 2023\",\"$1.00\",\"x\"\n", 3)]
    fn test_parse_rejects_wrong_field_count(#[case] csv: &str, #[case] expected_line: u64) {
        match parse_mint_csv("Checking", csv) {
            Err(ConvertError::Parse { line, .. }) => assert_eq!(line, Some(expected_line)),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[rstest]
    #[case("Jan 2023", ymd(2023, 1, 1))]
    #[case("Feb 2023", ymd(2023, 2, 1))]
    #[case("Dec 2019", ymd(2019, 12, 1))]
    #[case("September 2021", ymd(2021, 9, 1))]
    #[case("  Jun 2020  ", ymd(2020, 6, 1))]
    fn test_parse_partial_date(#[case] token: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_partial_date(token), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("2023")]
    #[case("Smarch 2023")]
    #[case("13/2023")]
    fn test_parse_partial_date_rejects(#[case] token: &str) {
        assert_eq!(parse_partial_date(token), None);
    }

    #[rstest]
    #[case("$100.00", Decimal::new(10000, 2))]
    #[case("$1,234.56", Decimal::new(123456, 2))]
    #[case("$1,234,567.89", Decimal::new(123456789, 2))]
    #[case("-$20.50", Decimal::new(-2050, 2))]
    #[case("\"$7.00\"", Decimal::new(700, 2))]
    #[case("42", Decimal::new(42, 0))]
    #[case("  $3.10 ", Decimal::new(310, 2))]
    fn test_parse_amount(#[case] token: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(token), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("$")]
    #[case("abc")]
    #[case("1.2.3")]
    fn test_parse_amount_rejects(#[case] token: &str) {
        assert_eq!(parse_amount(token), None);
    }

    #[test]
    fn test_detect_source_kind_tolerates_bom() {
        assert_eq!(
            detect_source_kind("\u{feff}\"DATES\",\"Debts\"\r"),
            Ok(SourceKind::Debts)
        );
    }
}
