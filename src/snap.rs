//! Ghost positions and interval snapping.
//!
//! The five ghost positions for a row are the positions its second instance
//! would take for each candidate interval 1..=5. A drag on the second
//! instance is quantized to the nearest ghost, and the matching candidate
//! index becomes the row's new periodic interval.

use crate::MAX_INTERVAL;

/// Number of ghost candidates, one per legal interval.
pub const GHOST_CANDIDATES: usize = MAX_INTERVAL as usize;

/// Maximum distance (in grid units) at which a ghost candidate captures a drag.
pub const SNAP_THRESHOLD: i64 = 5;

/// Candidate second-instance positions for each interval `i` in 1..=5.
///
/// `position_i = base_value * i + i + 1 = (base_value + 1) * i + 1`.
pub fn ghost_positions(base_value: u32) -> [i64; GHOST_CANDIDATES] {
    let base = base_value as i64;
    let mut positions = [0; GHOST_CANDIDATES];
    for (slot, position) in positions.iter_mut().enumerate() {
        let i = slot as i64 + 1;
        *position = (base + 1) * i + 1;
    }
    positions
}

/// Snap a target position to a ghost candidate and return the implied interval.
///
/// Picks the nearest candidate by absolute distance; on a tie the earlier
/// candidate (smaller interval) wins. Returns `None` when even the nearest
/// candidate is `SNAP_THRESHOLD` or more units away, in which case the caller
/// leaves the interval unchanged.
pub fn snap_to_interval(base_value: u32, target: i64) -> Option<u32> {
    let candidates = ghost_positions(base_value);

    let mut best = 0usize;
    for (i, candidate) in candidates.iter().enumerate().skip(1) {
        if (candidate - target).abs() < (candidates[best] - target).abs() {
            best = i;
        }
    }

    if (candidates[best] - target).abs() < SNAP_THRESHOLD {
        Some(best as u32 + 1)
    } else {
        None
    }
}
