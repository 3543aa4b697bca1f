use std::path::PathBuf;
use crate::csv_reader::{read_ledger, CsvError};

#[test]
fn test_read_ledger() {
    let results = read_ledger(&fixture_filename("ledger.csv"));
    match results {
        Ok(rows) => {
            assert_eq!(rows.len(), 5);
            assert_eq!(rows[0].from_account, "ACC1350");
            assert_eq!(rows[0].to_account, "ACC2041");
            assert_eq!(rows[0].amount, 1200.5);
            assert_eq!(rows[0].timestamp, "2023-04-01 09:15:00");
            assert_eq!(rows[0].from_holder, "Priya Nair");
            assert_eq!(rows[0].to_bank, "Westpac");
        },
        Err(e) => panic!("Unexpected results: {}", e)
    }
}

#[test]
fn test_sparse_row_reads_as_empty_fields() {
    let rows = read_ledger(&fixture_filename("ledger.csv")).unwrap();

    // Row 4 leaves email, phone and the trailing holder/bank cells blank
    assert_eq!(rows[3].email, "");
    assert_eq!(rows[3].phone, "");
    assert_eq!(rows[3].to_bank, "");
    assert_eq!(rows[3].from_account, "ACC7788");
}

#[test]
fn test_amount_with_currency_symbols() {
    let rows = read_ledger(&fixture_filename("ledger.csv")).unwrap();

    // "$3,500.00" in the file
    assert_eq!(rows[2].amount, 3500.0);
}

#[test]
fn test_missing_file() {
    let result = read_ledger(&fixture_filename("no_such_file.csv"));
    assert_eq!(result.unwrap_err(), CsvError::FileNotFoundError("File not found".to_string()));
}

#[test]
fn test_missing_column() {
    let result = read_ledger(&fixture_filename("missing_column.csv"));
    match result {
        Err(CsvError::InvalidFileError(msg)) => {
            assert_eq!(msg, "Unable to locate 'to_account' column");
        },
        _ => panic!("Unexpected results")
    }
}

#[test]
fn test_invalid_amount() {
    let result = read_ledger(&fixture_filename("bad_amount.csv"));
    match result {
        Err(CsvError::InvalidFileError(msg)) => {
            assert!(msg.contains("Invalid amount"));
        },
        _ => panic!("Unexpected results")
    }
}

/// Return the path to a file within the test data directory
pub(crate) fn fixture_filename(filename: &str) -> PathBuf {
    let mut dir = fixture_dir();
    dir.push(filename);
    dir
}

pub(crate) fn fixture_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("fixture");
    dir
}
