//! Sparse worksheet data and densification into a rectangular matrix.

use std::collections::BTreeMap;

/// Sparse row/column value map built by the worksheet parser.
///
/// Rows and columns are 1-based and keyed by their declared indices, so a
/// sheet whose only content sits at `B3` holds exactly one entry. The
/// maximum row and column derivation lives here and nowhere else; every
/// other component works with the sparse form.
#[derive(Debug, Clone, Default)]
pub struct SparseSheet {
    rows: BTreeMap<u32, BTreeMap<u32, String>>,
}

impl SparseSheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cell value at the given 1-based row and column.
    pub fn insert(&mut self, row: u32, col: u32, value: String) {
        self.rows.entry(row).or_default().insert(col, value);
    }

    /// Record that a row exists in the source even if it holds no cells.
    ///
    /// A declared-but-empty row still counts toward the dense row count,
    /// the same way a valueless cell counts toward the column count.
    pub fn mark_row(&mut self, row: u32) {
        self.rows.entry(row).or_default();
    }

    /// Highest row index present, or 0 for an empty sheet.
    pub fn row_count(&self) -> u32 {
        self.rows.keys().next_back().copied().unwrap_or(0)
    }

    /// Highest column index present across all rows, or 0 for an empty sheet.
    pub fn col_count(&self) -> u32 {
        self.rows
            .values()
            .filter_map(|cols| cols.keys().next_back().copied())
            .max()
            .unwrap_or(0)
    }

    /// Check if no cells have been recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Densify into a `row_count() x col_count()` matrix of strings.
    ///
    /// Every absent cell, including entire rows missing from the source,
    /// becomes the empty string. Rows are never ragged: each one carries
    /// exactly `col_count()` entries. An empty sheet yields zero rows.
    pub fn to_dense(&self) -> Vec<Vec<String>> {
        let row_count = self.row_count();
        let col_count = self.col_count();

        (1..=row_count)
            .map(|r| {
                let cols = self.rows.get(&r);
                (1..=col_count)
                    .map(|c| {
                        cols.and_then(|cells| cells.get(&c))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }
}
