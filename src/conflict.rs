//! Cross-row position conflict detection.
//!
//! A conflict is a position claimed by two or more active rows. Conflicts are
//! detected, never silently resolved: static compilation refuses to run while
//! any exist, and the collaborator highlights them for the user.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::PatternTable;

/// The set of positions occupied by two or more active rows.
///
/// Ordered for deterministic iteration and reporting. Only meaningful while
/// conflict checking is enabled; a disabled detector always reports an empty
/// set without scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSet(Vec<i64>);

impl ConflictSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether there are no conflicts.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of conflicting positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `position` is in conflict.
    pub fn contains(&self, position: i64) -> bool {
        self.0.binary_search(&position).is_ok()
    }

    /// The conflicting positions in ascending order.
    pub fn positions(&self) -> &[i64] {
        &self.0
    }
}

impl FromIterator<i64> for ConflictSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut positions: Vec<i64> = iter.into_iter().collect();
        positions.sort_unstable();
        positions.dedup();
        Self(positions)
    }
}

/// Scans active rows for position collisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictDetector {
    enabled: bool,
}

impl ConflictDetector {
    /// Create a detector, initially disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable conflict checking.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether conflict checking is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Scan active rows and collect every position occupied more than once.
    ///
    /// Disabled detection short-circuits to the empty set; the scan is not
    /// performed and then hidden.
    pub fn detect(&self, table: &PatternTable, active_rows: u32) -> ConflictSet {
        if !self.enabled {
            return ConflictSet::new();
        }
        scan(table, active_rows)
    }
}

/// Unconditional conflict scan over the active rows.
pub fn scan(table: &PatternTable, active_rows: u32) -> ConflictSet {
    let mut counts: BTreeMap<i64, u32> = BTreeMap::new();
    for (_, pattern) in table.active_patterns(active_rows) {
        for position in pattern.positions() {
            *counts.entry(position).or_insert(0) += 1;
        }
    }

    let conflicts: ConflictSet = counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(position, _)| position)
        .collect();

    tracing::debug!(
        active_rows,
        conflicts = conflicts.len(),
        "conflict scan complete"
    );
    conflicts
}
