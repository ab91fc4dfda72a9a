use std::path::PathBuf;

use serde::Serialize;

use saf_model::ValidationReport;
use saf_report::RunSummary;

/// Outcome of a conversion run.
#[derive(Debug, Serialize)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub rows: usize,
    pub summary: RunSummary,
}

/// Outcome of a validation run.
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    pub input: PathBuf,
    pub report: ValidationReport,
}

impl ValidateResult {
    pub fn has_issues(&self) -> bool {
        !self.report.is_clean()
    }
}
