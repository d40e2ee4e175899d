//! Sequence compilation: static overlay and algorithmic packing.
//!
//! Both modes consume the table restricted to active rows, in ascending
//! row-number order, and rebuild the whole output from scratch.
//!
//! **Static overlay** writes each item's value at its literal generated
//! position. It is the mode for which conflicts are meaningful: a non-empty
//! conflict set blocks compilation outright.
//!
//! **Algorithmic packing** ignores absolute positions for every row after the
//! first. Each item contributes its *segment length* — the gap to the previous
//! item in the same row, or the raw position for the row's first item — and
//! that many unoccupied slots are counted off from the current tail of the
//! output; the value lands in the last slot counted. Packing always succeeds,
//! which is the point: it sidesteps the conflict problem by repurposing each
//! row's relative spacing.
//!
//! The first row's direct placement is baseline-then-append: the baseline
//! fixes the initial occupancy and later rows pack around it.

use crate::conflict::ConflictSet;
use crate::types::{CompiledSequence, PatternTable};

/// Error type for compile operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileError {
    /// Static compilation refused because positions are contested.
    #[error("cannot compile statically: {} position(s) in conflict", conflicts.len())]
    Conflicts {
        /// The contested positions.
        conflicts: ConflictSet,
    },
}

/// Overlay every active row's items at their literal positions.
///
/// Fails with [`CompileError::Conflicts`] when the supplied conflict set is
/// non-empty. Rows are written in ascending row-number order; once allowed to
/// proceed there are no collisions by construction, so write order cannot
/// matter.
pub fn compile_static(
    table: &PatternTable,
    active_rows: u32,
    conflicts: &ConflictSet,
) -> Result<CompiledSequence, CompileError> {
    if !conflicts.is_empty() {
        return Err(CompileError::Conflicts {
            conflicts: conflicts.clone(),
        });
    }

    let mut sequence = CompiledSequence::new();
    for (_, pattern) in table.active_patterns(active_rows) {
        for item in pattern.items() {
            // Negative positions only arise from unclamped shifts and cannot
            // land in the dense output.
            if item.position >= 0 {
                sequence.write_at(item.position as usize, item.value);
            }
        }
    }

    tracing::debug!(
        active_rows,
        slots = sequence.len(),
        "static compile complete"
    );
    Ok(sequence)
}

/// Pack every active row into the unoccupied tail of a growing output.
///
/// The first participating row is the baseline and lands at its raw
/// positions. Every later item counts off its segment length in unoccupied
/// slots, scanning one output index at a time from the current end, and is
/// written into the last slot counted. Never fails.
pub fn compile_algorithmic(table: &PatternTable, active_rows: u32) -> CompiledSequence {
    let mut sequence = CompiledSequence::new();

    for (row_index, (_, pattern)) in table.active_patterns(active_rows).enumerate() {
        if row_index == 0 {
            for item in pattern.items() {
                if item.position >= 0 {
                    sequence.write_at(item.position as usize, item.value);
                }
            }
            continue;
        }

        let items = pattern.items();
        for (i, item) in items.iter().enumerate() {
            let segment = if i == 0 {
                item.position
            } else {
                item.position - items[i - 1].position
            };

            let mut counted: i64 = 0;
            let mut cursor = sequence.len();
            while counted < segment {
                if sequence.is_vacant(cursor) {
                    counted += 1;
                }
                cursor += 1;
            }
            // A zero segment (first item at position 0) counts off nothing
            // and lands on the slot just before the tail, exactly as the
            // cursor scan leaves it.
            if cursor > 0 {
                sequence.write_at(cursor - 1, item.value);
            }
        }
    }

    tracing::debug!(
        active_rows,
        slots = sequence.len(),
        "algorithmic compile complete"
    );
    sequence
}

/// Stateful compiler that retains the last successfully compiled sequence.
///
/// A failed static compile leaves the previous sequence untouched, and the
/// delimited export serializes whatever was produced last, so the retained
/// sequence is part of the contract rather than a cache.
#[derive(Debug, Clone, Default)]
pub struct SequenceCompiler {
    last: CompiledSequence,
}

impl SequenceCompiler {
    /// Create a compiler with an empty last sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a static compile and retain the result on success.
    pub fn compile_static(
        &mut self,
        table: &PatternTable,
        active_rows: u32,
        conflicts: &ConflictSet,
    ) -> Result<&CompiledSequence, CompileError> {
        let sequence = compile_static(table, active_rows, conflicts)?;
        self.last = sequence;
        Ok(&self.last)
    }

    /// Run an algorithmic compile and retain the result.
    pub fn compile_algorithmic(
        &mut self,
        table: &PatternTable,
        active_rows: u32,
    ) -> &CompiledSequence {
        self.last = compile_algorithmic(table, active_rows);
        &self.last
    }

    /// The most recently compiled sequence.
    pub fn last(&self) -> &CompiledSequence {
        &self.last
    }
}
