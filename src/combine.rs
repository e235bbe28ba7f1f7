//! Digest combination primitive and baseline scalar hash.
//!
//! `combine` folds one digest into another: `seed ⊕ (h + φ + (seed ≪ 6) + (seed ≫ 2))`
//! with wrapping arithmetic. The shifted-seed terms make the fold
//! order-sensitive, so `combine(combine(s, x), y)` and `combine(combine(s, y), x)`
//! disagree in general.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Golden ratio constant φ, the additive mixing seed.
const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;

/// Computes the 64-bit baseline hash of a value using the standard hasher.
///
/// `DefaultHasher::new()` is fixed-keyed, so the result is deterministic
/// within a build. Every scalar [`DeepHash`](crate::DeepHash) impl bottoms
/// out here.
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Folds `value` into `seed`, producing the next seed.
///
/// Deterministic and pure. Not commutative across fold order: permuting the
/// folded values changes the result (with overwhelming probability), which is
/// what keeps `[1, 2, 3]` and `[3, 2, 1]` apart.
#[must_use]
pub const fn combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(GOLDEN)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}
