//! Validation check modules.
//!
//! Each module inspects one aspect of the input table and returns issues.

mod columns;
mod files;

use std::path::Path;

use saf_ingest::Row;
use saf_model::{FieldSchema, ValidateOptions, ValidationReport};

/// Run all checks over the table. Row issues come first, in row order,
/// followed by column issues in header order.
pub fn run_all<'a>(
    headers: impl IntoIterator<Item = &'a str>,
    rows: &[Row],
    input_dir: &Path,
    schema: &FieldSchema,
    options: &ValidateOptions,
) -> ValidationReport {
    let mut report = ValidationReport::new(rows.len());

    // 1. Every row names a file that exists in the input directory
    for issue in files::check(rows, input_dir) {
        report.add(issue);
    }

    // 2. Every column belongs to the recognized catalog
    for issue in columns::check(headers, schema, options) {
        report.add(issue);
    }

    report
}
