//! Header/row snapshot of a parsed delimited document.

/// A parsed delimited document: one header row plus data rows.
///
/// Created fresh on every parse call and replaced wholesale on re-parse or
/// delimiter change. Header uniqueness is not enforced. Rows are usually
/// rectangular, but ragged rows are tolerated: out-of-range access through
/// [`ParsedTable::cell`] yields the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// True when the table holds neither headers nor rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Position of a header by exact name, first match wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell access by row/column index; out-of-range yields `""`.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}
