//! Key-to-value mapping reduction.
//!
//! Only maps whose iteration order is a deterministic function of content
//! qualify (`BTreeMap`); hash-ordered maps would violate the consistency
//! contract and get no impl.

use std::collections::BTreeMap;

use crate::DeepHash;
use crate::combine::combine;

/// Reduces `(key, value)` entries in iteration order to a single digest.
///
/// The fold starts from a zero seed — unlike [`ordered_sequence_hash`], entry
/// count is not mixed in — and folds each key digest, then its value digest,
/// each computed by its own type's strategy. An empty mapping therefore
/// digests to `0`.
///
/// [`ordered_sequence_hash`]: crate::ordered_sequence_hash
#[must_use]
pub fn mapping_hash<K, V, I>(entries: I) -> u64
where
    I: IntoIterator<Item = (K, V)>,
    K: DeepHash,
    V: DeepHash,
{
    let mut seed = 0;
    for (key, value) in entries {
        seed = combine(seed, key.deep_hash());
        seed = combine(seed, value.deep_hash());
    }
    seed
}

impl<K: DeepHash, V: DeepHash> DeepHash for BTreeMap<K, V> {
    fn deep_hash(&self) -> u64 {
        mapping_hash(self)
    }
}
