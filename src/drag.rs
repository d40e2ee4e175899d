//! Drag-to-parameter mapping.
//!
//! The collaborator reports raw pixel deltas; this module owns the policy for
//! turning them into parameter edits so the snapping behavior stays testable
//! without any pointer abstraction. A [`DragSession`] snapshots the row's
//! parameters at press time, and each update maps the *cumulative* pixel
//! delta from that snapshot, so repeated updates never accumulate rounding.

use crate::generator::generate;
use crate::snap::snap_to_interval;
use crate::types::RowParameters;

/// Grid cell width in pixels. One cell of drag equals one parameter unit.
pub const PIXELS_PER_CELL: f64 = 10.0;

/// Quantize a pixel delta to whole grid cells, rounding to nearest.
pub fn pixels_to_cells(delta_pixels: f64) -> i64 {
    (delta_pixels / PIXELS_PER_CELL).round() as i64
}

/// Which instance of a row a drag gesture grabbed.
///
/// The three targets edit different parameters: the first instance moves the
/// base value, the second re-derives the interval by ghost snapping, and any
/// later instance shifts the whole pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Instance 0: edits `base_value`.
    FirstInstance,
    /// Instance 1: edits `periodic_interval` via ghost snapping.
    SecondInstance,
    /// Instance 2 or later: edits `shift`.
    Tail,
}

impl DragTarget {
    /// Target for a grab on the given instance index.
    pub fn for_instance(index: u32) -> Self {
        match index {
            0 => Self::FirstInstance,
            1 => Self::SecondInstance,
            _ => Self::Tail,
        }
    }
}

/// An in-progress drag over one row's pattern.
#[derive(Debug, Clone)]
pub struct DragSession {
    target: DragTarget,
    start: RowParameters,
    /// Second-instance position at press time; only meaningful for
    /// `SecondInstance` drags and absent when the row has a single instance.
    start_second_position: Option<i64>,
}

impl DragSession {
    /// Begin a drag with the row's parameters as they were at press time.
    pub fn new(target: DragTarget, params: RowParameters) -> Self {
        let start_second_position = generate(&params, 0).items().get(1).map(|item| item.position);
        Self {
            target,
            start: params,
            start_second_position,
        }
    }

    /// The target grabbed at press time.
    pub fn target(&self) -> DragTarget {
        self.target
    }

    /// Map the cumulative pixel delta since press into new parameters.
    ///
    /// Always returns a full, clamped parameter set; when the delta changes
    /// nothing (sub-cell movement, snap miss, single-instance second grab)
    /// the press-time parameters come back unchanged.
    pub fn update(&self, delta_pixels: f64) -> RowParameters {
        let cells = pixels_to_cells(delta_pixels);

        match self.target {
            DragTarget::FirstInstance => {
                let base_value = (self.start.base_value as i64 + cells).max(0) as u32;
                RowParameters {
                    base_value,
                    ..self.start
                }
            }
            DragTarget::SecondInstance => {
                let Some(start_position) = self.start_second_position else {
                    return self.start;
                };
                match snap_to_interval(self.start.base_value, start_position + cells) {
                    Some(periodic_interval) => RowParameters {
                        periodic_interval,
                        ..self.start
                    },
                    None => self.start,
                }
            }
            DragTarget::Tail => {
                let shift = (self.start.shift + cells).max(self.start.min_shift());
                RowParameters { shift, ..self.start }
            }
        }
    }
}
