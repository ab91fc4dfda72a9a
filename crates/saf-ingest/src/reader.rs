//! Loading `input.csv` into ordered rows.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use saf_model::layout::INPUT_FILE_NAME;

use crate::error::{IngestError, Result};
use crate::row::Row;

/// The parsed metadata table.
#[derive(Debug, Clone)]
pub struct InputTable {
    pub path: PathBuf,
    pub headers: Arc<[String]>,
    pub rows: Vec<Row>,
}

impl InputTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fail unless every listed column is present in the header.
    pub fn require_columns(&self, columns: &[&str]) -> Result<()> {
        let missing: Vec<&str> = columns
            .iter()
            .copied()
            .filter(|column| !self.has_column(column))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(IngestError::input_format(
            &self.path,
            format!("missing required column(s): {}", missing.join(", ")),
        ))
    }
}

/// Location of the metadata table inside a parent directory.
pub fn input_path(parent_dir: &Path) -> PathBuf {
    parent_dir.join(INPUT_FILE_NAME)
}

/// Read `<parent_dir>/input.csv`.
pub fn read_input_table(parent_dir: &Path) -> Result<InputTable> {
    read_csv_rows(&input_path(parent_dir))
}

/// Read a CSV file whose first record is the header.
///
/// Cell values are kept verbatim; only header names are trimmed. Records with
/// a different field count than the header are rejected.
pub fn read_csv_rows(path: &Path) -> Result<InputTable> {
    validate_encoding(path)?;
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_rows_from(file, path)
}

/// Read CSV data from any reader; `path` is used for error context only.
pub fn read_csv_rows_from<R: Read>(source: R, path: &Path) -> Result<InputTable> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| csv_error(path, err))?
        .iter()
        .map(normalize_header)
        .collect();
    check_header(&headers, path)?;
    let headers: Arc<[String]> = headers.into();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|err| csv_error(path, err))?;
        let values = record.iter().map(str::to_string).collect();
        rows.push(Row::new(index, Arc::clone(&headers), values));
    }

    if rows.is_empty() {
        warn!(path = %path.display(), "input table has no data rows");
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "input table loaded"
    );
    Ok(InputTable {
        path: path.to_path_buf(),
        headers,
        rows,
    })
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn check_header(headers: &[String], path: &Path) -> Result<()> {
    if headers.is_empty() {
        return Err(IngestError::input_format(path, "header row is empty"));
    }
    let mut seen = BTreeSet::new();
    for (idx, header) in headers.iter().enumerate() {
        if header.is_empty() {
            return Err(IngestError::input_format(
                path,
                format!("column {} has an empty name", idx + 1),
            ));
        }
        if !seen.insert(header.as_str()) {
            return Err(IngestError::input_format(
                path,
                format!("duplicate column name '{header}'"),
            ));
        }
    }
    Ok(())
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    if let csv::ErrorKind::UnequalLengths {
        pos, expected_len, len, ..
    } = err.kind()
    {
        let line = pos.as_ref().map_or(0, csv::Position::line);
        return IngestError::input_format(
            path,
            format!("record on line {line} has {len} fields, expected {expected_len}"),
        );
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source: err,
    }
}

/// Reject UTF-16 input up front; UTF-8 with or without BOM is accepted.
fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }
    Ok(())
}
