//! CSV reader for part-data exports.
//!
//! Reads the whole source into memory and returns a [`Table`]: the header row
//! plus every data row as owned strings. No reshaping happens here.
//!
//! Input must be UTF-8 and comma-delimited, and every data row must have as
//! many cells as the header. Blank lines are skipped.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{CsvError, CsvResult};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// One data row of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line in the source where the row starts.
    pub line: u64,
    /// Cell values in column order.
    pub cells: Vec<String>,
}

impl Row {
    /// Pair every cell with its header name, in ordinal order.
    pub fn cells_with<'a>(
        &'a self,
        headers: &'a [String],
    ) -> impl Iterator<Item = (usize, &'a str, &'a str)> + 'a {
        headers
            .iter()
            .zip(self.cells.iter())
            .enumerate()
            .map(|(i, (name, value))| (i, name.as_str(), value.as_str()))
    }
}

/// Parsed CSV content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names from the header row.
    pub headers: Vec<String>,
    /// Data rows in source order.
    pub rows: Vec<Row>,
}

impl Table {
    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read and parse a CSV file.
///
/// # Example
/// ```ignore
/// let table = read_table("sample-part-data.csv")?;
/// println!("{} columns, {} rows", table.headers.len(), table.len());
/// ```
pub fn read_table<P: AsRef<Path>>(path: P) -> CsvResult<Table> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CsvError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CsvError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "read source file");
    parse_table(&bytes)
}

/// Parse CSV from an in-memory string.
///
/// ```
/// use recordshape::csv_to_table;
///
/// let table = csv_to_table("sku,name\nA1,Header\nB2,Socket\n").unwrap();
/// assert_eq!(table.headers, vec!["sku", "name"]);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rows[1].cells, vec!["B2", "Socket"]);
/// ```
pub fn csv_to_table(csv: &str) -> CsvResult<Table> {
    parse_table(csv.as_bytes())
}

/// Parse CSV from raw bytes.
pub fn parse_table(bytes: &[u8]) -> CsvResult<Table> {
    check_byte_order_mark(bytes)?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(from_csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(from_csv_error)?;
        let line = record.position().map_or(0, |p| p.line());
        rows.push(Row {
            line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    debug!(columns = headers.len(), rows = rows.len(), "parsed CSV");
    Ok(Table { headers, rows })
}

/// UTF-16 input is rejected before the CSV reader sees it.
fn check_byte_order_mark(bytes: &[u8]) -> CsvResult<()> {
    let encoding = if bytes.starts_with(UTF16_LE_BOM) {
        "UTF-16 LE"
    } else if bytes.starts_with(UTF16_BE_BOM) {
        "UTF-16 BE"
    } else {
        return Ok(());
    };

    Err(CsvError::InvalidEncoding {
        line: 1,
        message: format!("{encoding} byte order mark, expected UTF-8"),
    })
}

fn from_csv_error(err: csv::Error) -> CsvError {
    let line = err.position().map_or(0, |p| p.line());
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => CsvError::RowLength {
            line,
            expected: *expected_len as usize,
            found: *len as usize,
        },
        csv::ErrorKind::Utf8 { err: utf8, .. } => CsvError::InvalidEncoding {
            line,
            message: utf8.to_string(),
        },
        _ => CsvError::Parse {
            line,
            message: err.to_string(),
        },
    }
}
