use serde::{Deserialize, Serialize};

/// Fixed leading column for the case identifier
pub const CASE_ID_COLUMN: &str = "Case ID";
/// Fixed leading column for the activity name
pub const ACTIVITY_COLUMN: &str = "Activity";
/// Fixed leading column for the event timestamp
pub const TIMESTAMP_COLUMN: &str = "Timestamp";
/// Fixed leading column for the event resource
pub const RESOURCE_COLUMN: &str = "Resource";

/// The four fixed leading columns of a converted event table, in order
pub const FIXED_COLUMNS: [&str; 4] = [
    CASE_ID_COLUMN,
    ACTIVITY_COLUMN,
    TIMESTAMP_COLUMN,
    RESOURCE_COLUMN,
];

///
/// Flat tabular representation of an event log: a header row plus one data
/// row per event
///
/// Rows produced by the conversion are rectangular (every row has
/// `header.len()` cells). Hand-built row sets may be ragged; accessors treat
/// missing cells as empty.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RowSet {
    /// Column names, in column order
    pub header: Vec<String>,
    /// Data rows (one per event)
    pub rows: Vec<Vec<String>>,
}

impl RowSet {
    /// Create a new row set with the given header and no rows
    pub fn with_header(header: Vec<String>) -> Self {
        Self {
            header,
            rows: vec![],
        }
    }

    /// Number of data rows (excluding the header)
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (i.e., header width)
    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    /// Find the index of a column by (exact) name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|c| c == name)
    }

    /// Get a cell value; missing rows/cells read as the empty string
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod row_set_tests {
    use super::*;

    #[test]
    fn test_column_lookup_is_exact() {
        let rs = RowSet::with_header(vec!["Case ID".to_string(), "cost".to_string()]);
        assert_eq!(rs.column_index("Case ID"), Some(0));
        assert_eq!(rs.column_index("case id"), None);
        assert_eq!(rs.column_index("Cost"), None);
    }

    #[test]
    fn test_ragged_cell_access() {
        let mut rs = RowSet::with_header(vec!["a".to_string(), "b".to_string()]);
        rs.rows.push(vec!["x".to_string()]);
        assert_eq!(rs.cell(0, 0), "x");
        assert_eq!(rs.cell(0, 1), "");
        assert_eq!(rs.cell(1, 0), "");
        assert_eq!(rs.num_rows(), 1);
        assert_eq!(rs.num_columns(), 2);
    }
}
