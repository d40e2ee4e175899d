//! Deterministic per-row pattern generation.
//!
//! ## Algorithm
//!
//! A running cursor starts at `shift`. For each instance `n`:
//!
//! 1. `space = base_value * periodic_interval + n * periodic_interval`
//! 2. `cursor += space`
//! 3. emit an item at `cursor`
//! 4. `cursor += 1`
//!
//! The gap between consecutive instances widens by one `periodic_interval`
//! unit per step, so the pattern spreads out rather than settling on a fixed
//! lattice. The recurrence is the contract; do not replace it with a
//! closed form.

use crate::types::{PatternItem, RowParameters, RowPattern};

/// Expand one row's parameters into its full pattern.
///
/// `row_value` is the owning row's number and becomes the value carried by
/// every emitted item. Total over its input domain: the collaborator clamps
/// parameters before they get here, and the generator never validates.
pub fn generate(params: &RowParameters, row_value: u32) -> RowPattern {
    let base = params.base_value as i64;
    let interval = params.periodic_interval as i64;

    let mut cursor = params.shift;
    let mut items = Vec::with_capacity(params.instance_count as usize);

    for n in 0..params.instance_count {
        let space = base * interval + n as i64 * interval;
        cursor += space;
        items.push(PatternItem {
            value: row_value,
            instance_index: n,
            position: cursor,
        });
        cursor += 1;
    }

    RowPattern::from_items(items)
}
