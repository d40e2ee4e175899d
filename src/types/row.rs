//! Per-row parameter and pattern types.

use serde::{Deserialize, Serialize};

use crate::fingerprint::stable_hash_hex;
use crate::{MAX_INSTANCES, MAX_INTERVAL};

/// The four parameters that fully determine one row's pattern.
///
/// Owned by one row and mutated only through that row's input handlers.
/// The collaborator clamps values before they reach the kernel; `clamped`
/// applies the same bounds for callers that want them enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowParameters {
    /// Base offset multiplier. Non-negative.
    pub base_value: u32,
    /// Repeat interval, 1..=5.
    pub periodic_interval: u32,
    /// Number of instances to emit, 1..=20.
    pub instance_count: u32,
    /// Whole-pattern shift. May be negative down to `-(base_value * periodic_interval)`.
    pub shift: i64,
}

impl RowParameters {
    /// Create new row parameters.
    pub fn new(base_value: u32, periodic_interval: u32, instance_count: u32, shift: i64) -> Self {
        Self {
            base_value,
            periodic_interval,
            instance_count,
            shift,
        }
    }

    /// Lowest shift that keeps the first instance's position non-negative.
    pub fn min_shift(&self) -> i64 {
        -(self.base_value as i64 * self.periodic_interval as i64)
    }

    /// Return a copy with every field forced into its documented bounds.
    pub fn clamped(&self) -> Self {
        let periodic_interval = self.periodic_interval.clamp(1, MAX_INTERVAL);
        let instance_count = self.instance_count.clamp(1, MAX_INSTANCES);
        let base = Self {
            base_value: self.base_value,
            periodic_interval,
            instance_count,
            shift: self.shift,
        };
        Self {
            shift: self.shift.max(base.min_shift()),
            ..base
        }
    }

    /// Deterministic hash of the parameter set.
    pub fn params_hash(&self) -> String {
        stable_hash_hex(self)
    }
}

impl Default for RowParameters {
    fn default() -> Self {
        Self {
            base_value: 0,
            periodic_interval: 1,
            instance_count: 10,
            shift: 0,
        }
    }
}

/// One placed value within a row's pattern.
///
/// Ephemeral: regenerated in full whenever the row's parameters change,
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternItem {
    /// The value placed at `position` (the owning row's number).
    pub value: u32,
    /// Repetition index within the row, 0..instance_count.
    pub instance_index: u32,
    /// Absolute position on the shared axis.
    pub position: i64,
}

/// Ordered pattern for one row.
///
/// Items are ordered by instance index, equivalently by ascending position:
/// positions are strictly increasing in instance index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPattern {
    items: Vec<PatternItem>,
}

impl RowPattern {
    /// Build a pattern from already-ordered items.
    pub fn from_items(items: Vec<PatternItem>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0].position < w[1].position));
        Self { items }
    }

    /// The items in instance order.
    pub fn items(&self) -> &[PatternItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pattern has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = i64> + '_ {
        self.items.iter().map(|item| item.position)
    }

    /// The largest position, if any.
    pub fn max_position(&self) -> Option<i64> {
        self.items.last().map(|item| item.position)
    }
}
