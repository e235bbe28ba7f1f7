//! Ordered-sequence reduction.
//!
//! An ordered sequence is a container for which `a == b` implies that `a` and
//! `b` iterate identically. `Vec` and `BTreeSet` qualify; `HashSet` does not,
//! so it gets no impl here — hashing it would break the consistency contract.

use std::collections::{BTreeSet, LinkedList, VecDeque};

use crate::DeepHash;
use crate::combine::{combine, hash_one};

/// Reduces a finite, order-significant sequence to a single digest.
///
/// The element count seeds the fold, so an empty sequence digests to the
/// baseline hash of `0usize` regardless of element type. Each element is then
/// folded in iteration order via [`combine`].
///
/// Exposed so custom container types can implement [`DeepHash`] with the same
/// reduction the built-in sequence impls use.
#[must_use]
pub fn ordered_sequence_hash<I>(elements: I) -> u64
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: DeepHash,
{
    let iter = elements.into_iter();
    let mut seed = hash_one(&iter.len());
    for element in iter {
        seed = combine(seed, element.deep_hash());
    }
    seed
}

impl<T: DeepHash> DeepHash for [T] {
    fn deep_hash(&self) -> u64 {
        ordered_sequence_hash(self)
    }
}

impl<T: DeepHash, const N: usize> DeepHash for [T; N] {
    fn deep_hash(&self) -> u64 {
        self.as_slice().deep_hash()
    }
}

impl<T: DeepHash> DeepHash for Vec<T> {
    fn deep_hash(&self) -> u64 {
        self.as_slice().deep_hash()
    }
}

impl<T: DeepHash> DeepHash for VecDeque<T> {
    fn deep_hash(&self) -> u64 {
        ordered_sequence_hash(self)
    }
}

impl<T: DeepHash> DeepHash for LinkedList<T> {
    fn deep_hash(&self) -> u64 {
        ordered_sequence_hash(self)
    }
}

impl<T: DeepHash> DeepHash for BTreeSet<T> {
    fn deep_hash(&self) -> u64 {
        ordered_sequence_hash(self)
    }
}
