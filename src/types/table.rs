//! The table of all rows' parameters and generated patterns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::row::{RowParameters, RowPattern};
use crate::generator::generate;

/// One row's parameters together with the pattern they expand into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowEntry {
    /// The row's current parameters.
    pub params: RowParameters,
    /// The pattern last generated from `params`.
    pub pattern: RowPattern,
}

/// Mapping from row number to that row's parameters and pattern.
///
/// Uses `BTreeMap` so every traversal is in ascending row-number order,
/// which both compile modes depend on. Rows beyond the active row count
/// keep their entries; they are filtered out at read time, not evicted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTable {
    rows: BTreeMap<u32, RowEntry>,
}

impl PatternTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with rows 1..=n, each holding default parameters.
    pub fn with_rows(n: u32) -> Self {
        let mut table = Self::new();
        for row in 1..=n {
            table.set_row(row, RowParameters::default());
        }
        table
    }

    /// Set a row's parameters and regenerate its pattern in full.
    ///
    /// The row number doubles as the value placed at each generated position.
    pub fn set_row(&mut self, row: u32, params: RowParameters) {
        let pattern = generate(&params, row);
        self.rows.insert(row, RowEntry { params, pattern });
    }

    /// Remove a row entirely.
    pub fn remove_row(&mut self, row: u32) -> Option<RowEntry> {
        self.rows.remove(&row)
    }

    /// A row's current parameters.
    pub fn row_params(&self, row: u32) -> Option<RowParameters> {
        self.rows.get(&row).map(|entry| entry.params)
    }

    /// A row's generated pattern.
    pub fn row_pattern(&self, row: u32) -> Option<&RowPattern> {
        self.rows.get(&row).map(|entry| &entry.pattern)
    }

    /// Number of rows with an entry.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in ascending row-number order.
    pub fn all_patterns(&self) -> impl Iterator<Item = (u32, &RowPattern)> {
        self.rows.iter().map(|(row, entry)| (*row, &entry.pattern))
    }

    /// Rows participating in detection and compilation: row number within the
    /// active count and a non-empty pattern, ascending row-number order.
    pub fn active_patterns(&self, active_rows: u32) -> impl Iterator<Item = (u32, &RowPattern)> {
        self.rows
            .range(..=active_rows)
            .filter(|(_, entry)| !entry.pattern.is_empty())
            .map(|(row, entry)| (*row, &entry.pattern))
    }

    /// Largest position across every row, active or not.
    pub fn max_position(&self) -> Option<i64> {
        self.rows
            .values()
            .filter_map(|entry| entry.pattern.max_position())
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_row_regenerates_pattern() {
        let mut table = PatternTable::new();
        table.set_row(1, RowParameters::new(0, 1, 3, 0));

        let positions: Vec<i64> = table.row_pattern(1).unwrap().positions().collect();
        assert_eq!(positions, vec![0, 2, 5]);

        table.set_row(1, RowParameters::new(0, 1, 2, 4));
        let positions: Vec<i64> = table.row_pattern(1).unwrap().positions().collect();
        assert_eq!(positions, vec![4, 6]);
    }

    #[test]
    fn test_active_patterns_excludes_rows_past_count() {
        let table = PatternTable::with_rows(5);

        let active: Vec<u32> = table.active_patterns(3).map(|(row, _)| row).collect();
        assert_eq!(active, vec![1, 2, 3]);

        // Parameters persist for inactive rows.
        assert!(table.row_params(5).is_some());
    }

    #[test]
    fn test_max_position_spans_inactive_rows() {
        let mut table = PatternTable::new();
        table.set_row(1, RowParameters::new(0, 1, 2, 0));
        table.set_row(4, RowParameters::new(0, 1, 2, 40));

        // Row 4 dominates even when only row 1 is active.
        assert_eq!(table.max_position(), Some(42));
    }

    #[test]
    fn test_with_rows_orders_ascending() {
        let table = PatternTable::with_rows(3);
        let rows: Vec<u32> = table.all_patterns().map(|(row, _)| row).collect();
        assert_eq!(rows, vec![1, 2, 3]);
    }
}
