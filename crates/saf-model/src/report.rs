use serde::{Deserialize, Serialize};

/// A problem found by the validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// The row has no usable `Filename` value.
    MissingFilename { row: usize },
    /// The referenced file does not exist in the input directory.
    MissingFile { row: usize, filename: String },
    /// The header names a column outside the recognized catalog.
    UnrecognizedColumn { column: String },
}

impl ValidationIssue {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationIssue::MissingFilename { .. } => "missing-filename",
            ValidationIssue::MissingFile { .. } => "missing-file",
            ValidationIssue::UnrecognizedColumn { .. } => "unrecognized-column",
        }
    }

    /// 0-based data row the issue belongs to, if row-scoped.
    pub fn row(&self) -> Option<usize> {
        match self {
            ValidationIssue::MissingFilename { row } | ValidationIssue::MissingFile { row, .. } => {
                Some(*row)
            }
            ValidationIssue::UnrecognizedColumn { .. } => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::MissingFilename { row } => {
                format!("empty file name column at index: {row}")
            }
            ValidationIssue::MissingFile { filename, .. } => {
                format!("file not found: {filename}")
            }
            ValidationIssue::UnrecognizedColumn { column } => format!("invalid key: {column}"),
        }
    }
}

/// Outcome of validating one input table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub rows_checked: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new(rows_checked: usize) -> Self {
        Self {
            rows_checked,
            issues: Vec::new(),
        }
    }

    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn file_issue_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.row().is_some()).count()
    }

    pub fn column_issue_count(&self) -> usize {
        self.issues.len() - self.file_issue_count()
    }
}
