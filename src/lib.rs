//! # pattern-kernel
//!
//! Deterministic periodic pattern generation and sequence compilation for
//! row-based grids.
//!
//! Each numbered row owns four parameters (base value, periodic interval,
//! instance count, shift) that deterministically expand into a sparse pattern
//! of positioned values. The kernel answers one question:
//!
//! > Given every row's pattern, what single linear sequence do they merge into?
//!
//! ## Core Contract
//!
//! 1. Regenerate a row's whole pattern from its parameters (no incremental diffing)
//! 2. Detect positions claimed by more than one active row
//! 3. Compile all active rows into one dense sequence, in one of two modes:
//!    static overlay (position-exact, conflicts block) or algorithmic packing
//!    (relative spacing into unoccupied tail slots, conflicts irrelevant)
//! 4. Export the result as literal-list or delimited text
//!
//! ## Architecture
//!
//! ```text
//! RowParameters → generator → PatternTable → ConflictDetector → ConflictSet
//!                                  ↓                                ↓
//!                           SequenceCompiler (static | algorithmic) ←┘
//!                                  ↓
//!                           CompiledSequence → export (literal | delimited)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same parameters → identical pattern, byte-identical exports
//! - Rows are processed in ascending row-number order everywhere
//! - `CompiledSequence::fingerprint` is stable across runs and platforms

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod fingerprint;
pub mod generator;
pub mod snap;
pub mod drag;
pub mod conflict;
pub mod compiler;
pub mod export;
pub mod engine;

// Re-exports
pub use types::{RowParameters, PatternItem, RowPattern, PatternTable};
pub use types::sequence::{CompiledSequence, SequenceFingerprint};
pub use generator::generate;
pub use snap::{ghost_positions, snap_to_interval, GHOST_CANDIDATES, SNAP_THRESHOLD};
pub use drag::{pixels_to_cells, DragSession, DragTarget, PIXELS_PER_CELL};
pub use conflict::{ConflictDetector, ConflictSet};
pub use compiler::{compile_algorithmic, compile_static, CompileError, SequenceCompiler};
pub use export::{parse_delimited, parse_literal_list, to_delimited, to_literal_list, ExportError};
pub use engine::PatternEngine;
pub use fingerprint::{stable_bytes, stable_hash, stable_hash_hex};

/// Schema version for all pattern kernel types.
/// Increment on breaking changes to any schema type.
pub const PATTERN_KERNEL_SCHEMA_VERSION: &str = "1.0.0";

/// Maximum number of rows the collaborator may activate.
pub const MAX_ROWS: u32 = 50;

/// Maximum instance count per row.
pub const MAX_INSTANCES: u32 = 20;

/// Maximum periodic interval per row.
pub const MAX_INTERVAL: u32 = 5;
