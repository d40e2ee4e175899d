//! Stable serialization for deterministic fingerprints.
//!
//! Parameter hashes and sequence fingerprints are derived from canonical JSON
//! bytes so the same logical value always hashes identically.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: struct fields serialize in declaration order
//! - Stable Vec order: vectors serialize in index order
//! - No HashMap allowed: use BTreeMap for maps in hashed data

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Serialize a value to stable JSON bytes for hashing.
pub fn stable_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("stable serialization failed")
}

/// Compute the stable hash of a serializable value.
pub fn stable_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&stable_bytes(value), 0)
}

/// Compute the stable hash and return it as a hex string.
pub fn stable_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", stable_hash(value))
}
