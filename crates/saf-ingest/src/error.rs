//! Error types for metadata table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading `input.csv`.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input table not found.
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Failed to read the file.
    #[error("failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected a record.
    #[error("failed to parse CSV {}: {source}", path.display())]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Only UTF-8 input is supported.
    #[error("unsupported encoding {encoding} in {}", path.display())]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Header or row shape is not usable.
    #[error("malformed input {}: {message}", path.display())]
    InputFormat { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn input_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InputFormat {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for ingestion.
pub type Result<T> = std::result::Result<T, IngestError>;
