//! Synchronous engine façade for the presentation collaborator.
//!
//! The engine owns the table, the active-row count, the conflict-checking
//! toggle, the current conflict set, and the last compiled sequence. Every
//! operation runs to completion before the next event is processed; there is
//! no incremental diffing anywhere — a parameter edit regenerates the touched
//! row in full, a compile rebuilds the whole output.

use crate::compiler::{CompileError, SequenceCompiler};
use crate::conflict::{ConflictDetector, ConflictSet};
use crate::export::{to_delimited, to_literal_list};
use crate::types::{CompiledSequence, PatternTable, RowParameters, RowPattern};
use crate::MAX_ROWS;

/// Default number of active rows when none is configured.
const DEFAULT_ACTIVE_ROWS: u32 = 10;

/// The kernel's event-driven surface.
///
/// Input: per-row parameter updates, a global active-row count, and the
/// conflict-checking toggle. Output: row patterns for rendering, the conflict
/// set for highlighting, compiled sequences, and exported text.
#[derive(Debug, Clone)]
pub struct PatternEngine {
    table: PatternTable,
    active_rows: u32,
    detector: ConflictDetector,
    conflicts: ConflictSet,
    compiler: SequenceCompiler,
}

impl PatternEngine {
    /// Create an engine with an empty table and the default active-row count.
    pub fn new() -> Self {
        Self {
            table: PatternTable::new(),
            active_rows: DEFAULT_ACTIVE_ROWS,
            detector: ConflictDetector::new(),
            conflicts: ConflictSet::new(),
            compiler: SequenceCompiler::new(),
        }
    }

    /// Create an engine with rows 1..=n pre-populated with default parameters.
    pub fn with_rows(n: u32) -> Self {
        let n = n.clamp(1, MAX_ROWS);
        let mut engine = Self::new();
        engine.table = PatternTable::with_rows(n);
        engine.active_rows = n;
        engine.rescan();
        engine
    }

    /// Update one row's parameters and regenerate its pattern.
    ///
    /// The row number is clamped to 1..=50 and the parameters to their
    /// documented bounds, mirroring what the input controls enforce.
    pub fn update_row(&mut self, row: u32, params: RowParameters) {
        let row = row.clamp(1, MAX_ROWS);
        self.table.set_row(row, params.clamped());
        self.rescan();
    }

    /// Set the number of active rows, clamped to 1..=50.
    ///
    /// Rows beyond the count keep their parameters but stop participating in
    /// detection and compilation.
    pub fn set_active_rows(&mut self, count: u32) {
        self.active_rows = count.clamp(1, MAX_ROWS);
        self.rescan();
    }

    /// Toggle conflict checking.
    ///
    /// Turning it off clears the set without scanning; turning it on scans
    /// immediately.
    pub fn set_conflict_checking(&mut self, enabled: bool) {
        self.detector.set_enabled(enabled);
        self.rescan();
    }

    fn rescan(&mut self) {
        self.conflicts = self.detector.detect(&self.table, self.active_rows);
    }

    /// The current active-row count.
    pub fn active_rows(&self) -> u32 {
        self.active_rows
    }

    /// Whether conflict checking is enabled.
    pub fn conflict_checking(&self) -> bool {
        self.detector.is_enabled()
    }

    /// The current conflict set. Empty whenever checking is disabled.
    pub fn conflicts(&self) -> &ConflictSet {
        &self.conflicts
    }

    /// The full table of rows.
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// One row's generated pattern, for rendering.
    pub fn row_pattern(&self, row: u32) -> Option<&RowPattern> {
        self.table.row_pattern(row)
    }

    /// One row's current parameters.
    pub fn row_params(&self, row: u32) -> Option<RowParameters> {
        self.table.row_params(row)
    }

    /// Compile the active rows position-exactly.
    ///
    /// Fails while the current conflict set is non-empty; the previously
    /// compiled sequence stays as it was.
    pub fn compile_static(&mut self) -> Result<&CompiledSequence, CompileError> {
        self.compiler
            .compile_static(&self.table, self.active_rows, &self.conflicts)
    }

    /// Compile the active rows by packing; always succeeds.
    pub fn compile_algorithmic(&mut self) -> &CompiledSequence {
        self.compiler
            .compile_algorithmic(&self.table, self.active_rows)
    }

    /// The most recently compiled sequence.
    pub fn last_compiled(&self) -> &CompiledSequence {
        self.compiler.last()
    }

    /// Literal-list export over the full table (all rows, no conflict check).
    pub fn export_literal_list(&self) -> String {
        to_literal_list(&self.table)
    }

    /// Delimited export of the last compiled sequence.
    pub fn export_delimited(&self) -> String {
        to_delimited(self.compiler.last())
    }
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new()
    }
}
