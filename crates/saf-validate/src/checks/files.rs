//! Bitstream file checks.

use std::path::Path;

use saf_ingest::Row;
use saf_model::{FILENAME_FIELD, ValidationIssue};

/// Report rows with a blank `Filename` and filenames absent from `input_dir`.
pub fn check(rows: &[Row], input_dir: &Path) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for row in rows {
        let Some(filename) = row.non_blank(FILENAME_FIELD) else {
            issues.push(ValidationIssue::MissingFilename { row: row.index() });
            continue;
        };
        if !input_dir.join(filename).is_file() {
            issues.push(ValidationIssue::MissingFile {
                row: row.index(),
                filename: filename.to_string(),
            });
        }
    }
    issues
}
