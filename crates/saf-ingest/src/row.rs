//! Header-keyed rows of the metadata table.

use std::sync::Arc;

/// One data record: raw cell values keyed by the shared header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    index: usize,
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl Row {
    /// Build a row over a shared header. Missing trailing values read as empty.
    pub fn new(index: usize, headers: Arc<[String]>, mut values: Vec<String>) -> Self {
        values.resize(headers.len(), String::new());
        Self {
            index,
            headers,
            values,
        }
    }

    /// Build a standalone row from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(index: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (headers, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .unzip();
        Self::new(index, headers.into(), values)
    }

    /// 0-based position among the data rows.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|header| header == column)
            .map(|idx| self.values[idx].as_str())
    }

    /// The value of `column` unless it is absent or whitespace-only.
    pub fn non_blank(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|value| !value.trim().is_empty())
    }

    pub fn is_blank(&self, column: &str) -> bool {
        self.non_blank(column).is_none()
    }

    /// `(column, value)` pairs in header order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }
}
