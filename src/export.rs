//! Textual export of compiled sequences.
//!
//! Two deliberately asymmetric forms:
//!
//! - the literal-list form recomputes a dense overlay from the **full table**
//!   (every row, active or not, no conflict check) and renders it as
//!   `pattern = [v0, None, v2]`;
//! - the delimited form serializes the **last compiled sequence** as
//!   `v0,,v2` with empty fields for gaps.
//!
//! The two exports are therefore not guaranteed to agree whenever a static
//! conflict exists or algorithmic mode ran last. That mismatch is a contract,
//! not a bug.

use crate::types::{CompiledSequence, PatternTable};

/// Token rendered for an empty slot in the literal-list form.
const EMPTY_LITERAL: &str = "None";

/// Error type for parsing exported text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    /// The literal-list wrapper (`pattern = [...]`) is missing or malformed.
    #[error("malformed literal list: {0}")]
    MalformedLiteralList(String),
    /// A field was neither empty, the empty token, nor an integer value.
    #[error("unparseable slot token: {0:?}")]
    BadToken(String),
}

/// Render the full table as a literal list, overlay style.
///
/// Ignores any prior compile step and any conflict state: every row's items
/// are overlaid at their literal positions up to the global maximum position.
/// An empty table renders as `pattern = []`.
pub fn to_literal_list(table: &PatternTable) -> String {
    let mut sequence = CompiledSequence::new();
    for (_, pattern) in table.all_patterns() {
        for item in pattern.items() {
            if item.position >= 0 {
                sequence.write_at(item.position as usize, item.value);
            }
        }
    }

    let body: Vec<String> = sequence
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(value) => value.to_string(),
            None => EMPTY_LITERAL.to_string(),
        })
        .collect();

    format!("pattern = [{}]", body.join(", "))
}

/// Render a compiled sequence as delimited text, one field per slot.
///
/// Empty slots become empty fields; an empty sequence becomes empty text.
pub fn to_delimited(sequence: &CompiledSequence) -> String {
    sequence
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(value) => value.to_string(),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse literal-list text back into a sequence.
pub fn parse_literal_list(text: &str) -> Result<CompiledSequence, ExportError> {
    let inner = text
        .strip_prefix("pattern = [")
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ExportError::MalformedLiteralList(text.to_string()))?;

    if inner.is_empty() {
        return Ok(CompiledSequence::new());
    }

    let slots = inner
        .split(',')
        .map(|token| parse_slot(token.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CompiledSequence::from_slots(slots))
}

/// Parse delimited text back into a sequence.
pub fn parse_delimited(text: &str) -> Result<CompiledSequence, ExportError> {
    if text.is_empty() {
        return Ok(CompiledSequence::new());
    }

    let slots = text
        .split(',')
        .map(parse_slot)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CompiledSequence::from_slots(slots))
}

fn parse_slot(token: &str) -> Result<Option<u32>, ExportError> {
    if token.is_empty() || token == EMPTY_LITERAL {
        return Ok(None);
    }
    token
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ExportError::BadToken(token.to_string()))
}
