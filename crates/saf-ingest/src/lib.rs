//! Metadata table ingestion.
//!
//! Reads `input.csv` from a parent directory into an ordered sequence of
//! header-keyed [`Row`]s and rejects tables whose header shape is unusable.

pub mod error;
pub mod reader;
pub mod row;

pub use error::{IngestError, Result};
pub use reader::{InputTable, input_path, read_csv_rows, read_csv_rows_from, read_input_table};
pub use row::Row;
