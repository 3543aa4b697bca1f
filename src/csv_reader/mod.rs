#[cfg(test)]
mod tests;

use std::fmt;
use std::path::Path;
use csv::StringRecord;
use log::info;
use regex::Regex;

use crate::transaction::Transaction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    FileNotFoundError(String),
    InvalidFileError(String),
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "csv reading error: {}",
            match self {
                CsvError::FileNotFoundError(s) => s,
                CsvError::InvalidFileError(s) => s,
            }
        )
    }
}

impl std::error::Error for CsvError {}

/// Column positions of the ledger file resolved from its header row
struct CsvHeaderIndex {
    from_account: usize,
    to_account: usize,
    amount: usize,
    timestamp: usize,
    ip: usize,
    email: usize,
    phone: usize,
    from_holder: usize,
    from_bank: usize,
    to_holder: usize,
    to_bank: usize,
}

/// Read the transaction ledger from a csv file. The file must carry a header
/// row naming all ledger columns; column order does not matter.
pub(crate) fn read_ledger(file_path: &Path) -> Result<Vec<Transaction>, CsvError> {
    if !file_path.exists() {
        return Err(CsvError::FileNotFoundError("File not found".to_string()));
    }

    info!("Scanning CSV headers from {:?}", file_path);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(file_path)
        .map_err(|e| CsvError::InvalidFileError(e.to_string()))?;

    let headers = rdr.headers()
        .map_err(|e| CsvError::InvalidFileError(e.to_string()))?
        .clone();
    let header_index = parse_header_index(&headers)?;

    let mut transactions: Vec<Transaction> = vec![];
    for (row_number, record) in rdr.records().enumerate() {
        let row = record.map_err(|e| CsvError::InvalidFileError(e.to_string()))?;

        let amount = parse_amount(&row, header_index.amount, row_number)?;
        transactions.push(Transaction {
            from_account: cell(&row, header_index.from_account),
            to_account: cell(&row, header_index.to_account),
            amount,
            timestamp: cell(&row, header_index.timestamp),
            ip: cell(&row, header_index.ip),
            email: cell(&row, header_index.email),
            phone: cell(&row, header_index.phone),
            from_holder: cell(&row, header_index.from_holder),
            from_bank: cell(&row, header_index.from_bank),
            to_holder: cell(&row, header_index.to_holder),
            to_bank: cell(&row, header_index.to_bank),
        });
    }

    info!("Read {} transactions from {:?}", transactions.len(), file_path);
    Ok(transactions)
}

fn parse_header_index(headers: &StringRecord) -> Result<CsvHeaderIndex, CsvError> {
    Ok(CsvHeaderIndex {
        from_account: find_column(headers, r"(?i)^from[ _]account$", "from_account")?,
        to_account: find_column(headers, r"(?i)^to[ _]account$", "to_account")?,
        amount: find_column(headers, r"(?i)^amount$", "amount")?,
        timestamp: find_column(headers, r"(?i)^timestamp$", "timestamp")?,
        ip: find_column(headers, r"(?i)^ip$", "ip")?,
        email: find_column(headers, r"(?i)^email$", "email")?,
        phone: find_column(headers, r"(?i)^phone$", "phone")?,
        from_holder: find_column(headers, r"(?i)^from[ _]holder$", "from_holder")?,
        from_bank: find_column(headers, r"(?i)^from[ _]bank$", "from_bank")?,
        to_holder: find_column(headers, r"(?i)^to[ _]holder$", "to_holder")?,
        to_bank: find_column(headers, r"(?i)^to[ _]bank$", "to_bank")?,
    })
}

/// Locate a ledger column in the header row. Matching is case-insensitive
/// and accepts a space in place of the underscore, since exported statements
/// are not consistent about either.
fn find_column(headers: &StringRecord, pattern: &str, column_name: &str) -> Result<usize, CsvError> {
    let re = Regex::new(pattern).unwrap();
    for (i, s) in headers.iter().enumerate() {
        if re.is_match(s.trim()) {
            return Ok(i);
        }
    }

    Err(CsvError::InvalidFileError(format!("Unable to locate '{}' column", column_name)))
}

/// Missing cells (a row shorter than the header) read as empty strings, so a
/// sparse row still yields a usable transaction.
fn cell(row: &StringRecord, index: usize) -> String {
    row.get(index).unwrap_or("").trim().to_string()
}

fn parse_amount(row: &StringRecord, index: usize, row_number: usize) -> Result<f32, CsvError> {
    let amount_str = row.get(index).unwrap_or("").replace(['$', ','], "");
    let amount_str = amount_str.trim();
    if amount_str.is_empty() {
        return Ok(0.0);
    }

    amount_str.parse::<f32>().map_err(|_| {
        CsvError::InvalidFileError(format!("Invalid amount '{}' in row {}", amount_str, row_number + 1))
    })
}
