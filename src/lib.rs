//! Deterministic `u64` digests for nested composite values.
//!
//! Standard hash-based containers need a single hash per key, but composite
//! keys (a `Vec` of pairs, a `BTreeMap` whose values are sets, a tuple mixing
//! both) force every call site to hand-write a combinator. This crate provides
//! one trait, [`DeepHash`], with impls for the common composite shapes, and a
//! dispatcher that resolves the right reduction statically.
//!
//! # Key properties
//!
//! - **Static resolution**: which strategy hashes a type is a compile-time
//!   property; an unhashable type fails to compile, never at runtime
//! - **Determinism**: same value, same digest, every call
//! - **Consistency**: for every provided impl, `a == b` implies
//!   `hash_of(&a) == hash_of(&b)`
//! - **Order sensitivity**: sequences hash by iteration order, so `[1, 2, 3]`
//!   and `[3, 2, 1]` get different digests
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use deep_hash::{DeepHash, combined_hash, hash_of};
//!
//! let key: Vec<(String, Vec<i32>)> =
//!     vec![("a".to_owned(), vec![1, 2]), ("b".to_owned(), vec![3])];
//! let digest = hash_of(&key);
//! assert_eq!(digest, hash_of(&key));
//!
//! let map: BTreeMap<u32, Vec<u8>> = BTreeMap::from([(1, vec![7])]);
//! let _ = hash_of(&(map, "label", 42_u64));
//!
//! struct Endpoint {
//!     host: String,
//!     port: u16,
//! }
//!
//! impl DeepHash for Endpoint {
//!     fn deep_hash(&self) -> u64 {
//!         combined_hash!(self.host, self.port)
//!     }
//! }
//! ```
//!
//! # Not provided
//!
//! No cryptographic strength, no stability across platforms or crate
//! versions, and no impls for `HashMap`/`HashSet`: their iteration order does
//! not correlate with equality, which the sequence and mapping reductions
//! require.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod combine;

mod mapping;
mod scalar;
mod sequence;
mod tuple;

#[cfg(test)]
mod tests;

pub use mapping::mapping_hash;
pub use sequence::ordered_sequence_hash;

/// A value reducible to a single deterministic `u64` digest.
///
/// Impls are provided for scalars, `Vec`/slices/arrays, `VecDeque`,
/// `LinkedList`, `BTreeSet`, `BTreeMap`, pairs, and tuples up to arity 12.
/// Fieldless enums opt in via [`deep_hash_by_ordinal!`]; any other user type
/// opts in by implementing the trait directly, which takes precedence over
/// every generic rule simply because no generic rule can apply to it.
///
/// # Consistency contract
///
/// If `a == b` by the type's own equality, `a.deep_hash() == b.deep_hash()`
/// must hold. Every provided impl honors this; an implementor of a custom
/// `deep_hash` takes on the same obligation, and the library never checks it.
/// The usual way to honor it is to fold exactly the fields that participate
/// in `PartialEq` through [`combined_hash!`].
pub trait DeepHash {
    /// Returns the digest of `self`.
    ///
    /// Must be pure: no interior mutation, no dependence on anything but the
    /// value itself.
    #[must_use]
    fn deep_hash(&self) -> u64;
}

/// Returns the digest of a single value.
///
/// Thin dispatcher over [`DeepHash`]; resolution of the hashing strategy for
/// `T` happens at compile time.
#[must_use]
pub fn hash_of<T: DeepHash + ?Sized>(value: &T) -> u64 {
    value.deep_hash()
}

/// Returns the digest of a single value.
#[deprecated(since = "0.2.0", note = "renamed to `hash_of`")]
#[must_use]
pub fn deep_hash_of<T: DeepHash + ?Sized>(value: &T) -> u64 {
    hash_of(value)
}

/// Digests zero or more values of possibly different types into one `u64`.
///
/// Zero arguments yield `0`. Otherwise the first argument's digest seeds a
/// left-to-right [`combine`](combine::combine) fold over the rest, so
/// argument order matters: `combined_hash!(1, "a")` and
/// `combined_hash!("a", 1)` disagree (with overwhelming probability).
///
/// This is the recommended body for a custom [`DeepHash`] impl:
///
/// ```
/// use deep_hash::{DeepHash, combined_hash};
///
/// struct Job {
///     name: String,
///     retries: u32,
///     tags: Vec<String>,
/// }
///
/// impl DeepHash for Job {
///     fn deep_hash(&self) -> u64 {
///         combined_hash!(self.name, self.retries, self.tags)
///     }
/// }
/// ```
#[macro_export]
macro_rules! combined_hash {
    () => {
        0_u64
    };
    ($($value:expr),+ $(,)?) => {
        [$($crate::hash_of(&$value)),+]
            .into_iter()
            .reduce($crate::combine::combine)
            .unwrap_or(0)
    };
}

/// Implements [`DeepHash`] for fieldless `Copy` enums by ordinal.
///
/// The discriminant, cast to `u64`, is the digest — no mixing step, mirroring
/// how such enums compare by ordinal in the first place.
///
/// ```
/// use deep_hash::{deep_hash_by_ordinal, hash_of};
///
/// #[derive(Clone, Copy, PartialEq, Eq)]
/// enum Phase {
///     Solid,
///     Liquid,
///     Gas,
/// }
///
/// deep_hash_by_ordinal!(Phase);
///
/// assert_eq!(hash_of(&Phase::Liquid), 1);
/// ```
#[macro_export]
macro_rules! deep_hash_by_ordinal {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::DeepHash for $ty {
            fn deep_hash(&self) -> u64 {
                *self as u64
            }
        }
    )+};
}
