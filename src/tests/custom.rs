use std::collections::BTreeMap;

use crate::{DeepHash, combined_hash, hash_of};

#[derive(Clone, PartialEq, Eq, Debug)]
struct Session {
    user: String,
    roles: Vec<String>,
    limits: BTreeMap<String, u32>,
}

impl DeepHash for Session {
    fn deep_hash(&self) -> u64 {
        combined_hash!(self.user, self.roles, self.limits)
    }
}

fn sample() -> Session {
    Session {
        user: "ada".to_owned(),
        roles: vec!["admin".to_owned(), "audit".to_owned()],
        limits: BTreeMap::from([("rps".to_owned(), 100)]),
    }
}

/// A custom impl folds exactly its fields, so equal values digest equal.
#[test]
fn custom_impl_is_consistent() {
    let a = sample();
    let b = sample();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

/// Any field change propagates into the digest.
#[test]
fn field_changes_propagate() {
    let base = sample();

    let mut renamed = sample();
    renamed.user = "bab".to_owned();
    assert_ne!(hash_of(&base), hash_of(&renamed));

    let mut relimited = sample();
    relimited.limits.insert("rps".to_owned(), 99);
    assert_ne!(hash_of(&base), hash_of(&relimited));
}

/// A wrapper with its own impl wins over the shape of its contents: the
/// wrapper digests by a constant here, not by the sequence rule.
#[derive(PartialEq, Eq)]
struct Opaque(Vec<u8>);

impl DeepHash for Opaque {
    fn deep_hash(&self) -> u64 {
        0xC0_FFEE
    }
}

#[test]
fn own_impl_beats_container_shape() {
    let wrapped = Opaque(vec![1, 2, 3]);
    assert_eq!(hash_of(&wrapped), 0xC0_FFEE);
    assert_ne!(hash_of(&wrapped), hash_of(&wrapped.0));
}

/// Zero arguments fold to zero.
#[test]
fn combined_hash_of_nothing_is_zero() {
    assert_eq!(combined_hash!(), 0);
}

/// One argument is just the dispatcher.
#[test]
fn combined_hash_of_one_matches_hash_of() {
    assert_eq!(combined_hash!(42_u64), hash_of(&42_u64));
    assert_eq!(combined_hash!("x"), hash_of("x"));
}

/// Repeatable across calls, and argument order matters.
#[test]
fn combined_hash_is_ordered_and_repeatable() {
    let first = combined_hash!(1_u32, "a");
    let second = combined_hash!(1_u32, "a");
    assert_eq!(first, second);
    assert_ne!(first, combined_hash!("a", 1_u32));
}

/// Custom impls nest inside generic containers.
#[test]
fn custom_values_nest_in_containers() {
    let sessions = vec![sample(), sample()];
    let same = vec![sample(), sample()];
    assert_eq!(hash_of(&sessions), hash_of(&same));
}

/// The deprecated alias forwards to `hash_of` unchanged.
#[test]
#[allow(deprecated)]
fn deprecated_alias_forwards() {
    let value = vec![(1_u8, "one"), (2, "two")];
    assert_eq!(crate::deep_hash_of(&value), hash_of(&value));
}
