//! Read-only diagnostics for an input table.
//!
//! Validation never writes files and never fails on data problems: every
//! finding is collected into a [`ValidationReport`].

mod checks;

use std::path::Path;

use tracing::{debug, info};

use saf_ingest::{InputTable, Row};
use saf_model::{FieldSchema, ValidateOptions, ValidationReport};

/// Validate rows against `input_dir` and the schema.
///
/// Column names are taken from the first row; an empty row slice is
/// trivially clean.
pub fn validate(
    rows: &[Row],
    input_dir: &Path,
    schema: &FieldSchema,
    options: &ValidateOptions,
) -> ValidationReport {
    let headers: Vec<&str> = rows.first().map(|row| row.columns().collect()).unwrap_or_default();
    run(headers, rows, input_dir, schema, options)
}

/// Validate a loaded table. Column checks use the header even when the
/// table has no data rows.
pub fn validate_table(
    table: &InputTable,
    input_dir: &Path,
    schema: &FieldSchema,
    options: &ValidateOptions,
) -> ValidationReport {
    let headers = table.headers().iter().map(String::as_str);
    run(headers, &table.rows, input_dir, schema, options)
}

fn run<'a>(
    headers: impl IntoIterator<Item = &'a str>,
    rows: &[Row],
    input_dir: &Path,
    schema: &FieldSchema,
    options: &ValidateOptions,
) -> ValidationReport {
    debug!(
        rows = rows.len(),
        input_dir = %input_dir.display(),
        exempt_bitstream_columns = options.exempt_bitstream_columns,
        "validating input"
    );
    let report = checks::run_all(headers, rows, input_dir, schema, options);
    info!(
        rows = report.rows_checked,
        file_issues = report.file_issue_count(),
        column_issues = report.column_issue_count(),
        "validation finished"
    );
    report
}
