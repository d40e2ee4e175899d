//! Core types for the pattern kernel.

pub mod row;
pub mod table;
pub mod sequence;

pub use row::{PatternItem, RowParameters, RowPattern};
pub use sequence::{CompiledSequence, SequenceFingerprint};
pub use table::PatternTable;
