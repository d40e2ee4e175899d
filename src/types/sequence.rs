//! Compiled sequence type.

use serde::{Deserialize, Serialize};

use crate::fingerprint::stable_hash_hex;

/// Fingerprint of a compiled sequence.
///
/// Content-derived: identical slot contents produce an identical fingerprint
/// regardless of which compile mode produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceFingerprint(String);

impl SequenceFingerprint {
    /// Create a fingerprint from a hash string.
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the fingerprint as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SequenceFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The merged output of a compile invocation.
///
/// Dense from index 0 to the maximum position seen; unfilled slots hold
/// `None`. Rebuilt wholesale on every compile, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledSequence {
    slots: Vec<Option<u32>>,
}

impl CompiledSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence directly from slots.
    pub fn from_slots(slots: Vec<Option<u32>>) -> Self {
        Self { slots }
    }

    /// Number of slots, filled or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sequence has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The value at `index`, if the slot exists and is filled.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.slots.get(index).copied().flatten()
    }

    /// All slots in order.
    pub fn slots(&self) -> &[Option<u32>] {
        &self.slots
    }

    /// The filled slots as (index, value) pairs, ascending by index.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|value| (index, value)))
    }

    /// Write `value` at `index`, growing the sequence with empty slots as needed.
    pub(crate) fn write_at(&mut self, index: usize, value: u32) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(value);
    }

    /// Whether the slot at `index` is currently unoccupied.
    ///
    /// Slots past the end count as unoccupied: the sequence grows into them.
    pub(crate) fn is_vacant(&self, index: usize) -> bool {
        self.slots.get(index).map_or(true, |slot| slot.is_none())
    }

    /// Content fingerprint of the sequence.
    pub fn fingerprint(&self) -> SequenceFingerprint {
        SequenceFingerprint::new(stable_hash_hex(&self.slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_at_grows_with_empty_slots() {
        let mut seq = CompiledSequence::new();
        seq.write_at(3, 7);

        assert_eq!(seq.len(), 4);
        assert_eq!(seq.slots(), &[None, None, None, Some(7)]);
        assert_eq!(seq.get(3), Some(7));
        assert_eq!(seq.get(0), None);
        assert_eq!(seq.get(99), None);
    }

    #[test]
    fn test_vacancy_past_end() {
        let mut seq = CompiledSequence::new();
        seq.write_at(0, 1);

        assert!(!seq.is_vacant(0));
        assert!(seq.is_vacant(1));
        assert!(seq.is_vacant(100));
    }

    #[test]
    fn test_occupied_pairs() {
        let seq = CompiledSequence::from_slots(vec![Some(1), None, Some(2)]);
        let pairs: Vec<(usize, u32)> = seq.occupied().collect();
        assert_eq!(pairs, vec![(0, 1), (2, 2)]);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = CompiledSequence::from_slots(vec![Some(1), None]);
        let b = CompiledSequence::from_slots(vec![Some(1), None]);
        let c = CompiledSequence::from_slots(vec![None, Some(1)]);

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
