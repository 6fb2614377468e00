//! Raw feed table - header-keyed rows as read from the feed, before decoding

use std::collections::HashMap;

/// One data row of the feed, keyed by header name
///
/// A column can be absent from a row either because the header never named it or
/// because the row was shorter than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedRow {
    line: u64,
    cells: HashMap<String, String>,
}

impl FeedRow {
    /// Create a row from its source line number and its cells
    pub fn new(line: u64, cells: HashMap<String, String>) -> Self {
        Self { line, cells }
    }

    /// Build a row from `(column, value)` pairs
    pub fn from_pairs<K, V>(line: u64, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Source line of this row (1-based, header is line 1)
    #[inline]
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Raw cell value for a column, if the column is present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Check if a column is present in this row
    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Number of cells in the row
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A whole feed document: the header plus data rows in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedTable {
    headers: Vec<String>,
    rows: Vec<FeedRow>,
}

impl FeedTable {
    /// Create a new FeedTable
    pub fn new(headers: Vec<String>, rows: Vec<FeedRow>) -> Self {
        Self { headers, rows }
    }

    /// Column names from the header row
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Check if the header names a column
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Data rows in document order
    pub fn rows(&self) -> &[FeedRow] {
        &self.rows
    }

    /// Consume the table, yielding its rows
    pub fn into_rows(self) -> Vec<FeedRow> {
        self.rows
    }

    /// Number of data rows (header excluded)
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
