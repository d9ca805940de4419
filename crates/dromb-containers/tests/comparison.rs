//! Integration tests for VectorULong equality, hashing and ordering.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use dromb_containers::math::lanes;
use dromb_containers::math::VectorULong;

fn vector(values: &[u64]) -> VectorULong {
    VectorULong::from_vec(values.to_vec()).expect("non-empty test vector")
}

fn hash_of(v: &VectorULong) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}

// ---------------------------------------------------------------------------
// Equality and hashing
// ---------------------------------------------------------------------------

#[test]
fn equal_vectors_compare_equal() {
    let a = VectorULong::from_elem(2, 5).unwrap();
    let b = VectorULong::from_elem(2, 5).unwrap();
    assert!(a == b);
    assert!(!(a != b));
}

#[test]
fn different_length_or_values_are_not_equal() {
    assert_ne!(vector(&[5, 5]), vector(&[5, 5, 5]));
    assert_ne!(vector(&[5, 5]), vector(&[5, 4]));
    // Zero padding applies to arithmetic only, never to equality.
    assert_ne!(vector(&[1]), vector(&[1, 0]));
}

#[test]
fn error_code_does_not_affect_equality() {
    let a = vector(&[1, 2]);
    let b = vector(&[1, 2]);
    a.get(42);
    assert_eq!(a.error_code(), -1);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn absent_vectors() {
    let a = vector(&[1]);
    assert!(VectorULong::equals(None, None));
    assert!(!VectorULong::equals(Some(&a), None));
    assert!(!VectorULong::equals(None, Some(&a)));
    assert!(VectorULong::equals(Some(&a), Some(&a.clone())));
}

#[test]
fn equal_vectors_hash_identically() {
    let a = vector(&[3, 1, 4, 1, 5]);
    let b = a.clone();
    let c = vector(&[3, 1, 4, 1, 5]);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&a), hash_of(&c));
}

#[test]
fn vectors_work_as_set_keys() {
    let mut set = HashSet::new();
    set.insert(vector(&[1, 2]));
    set.insert(vector(&[1, 2]));
    set.insert(vector(&[2, 1]));
    assert_eq!(set.len(), 2);
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn strictly_greater_lanes() {
    let a = vector(&[5, 5]);
    let b = vector(&[4, 4]);
    assert!(a.greater_than(&b));
    assert!(a.greater_or_equal(&b));
    assert!(!a.less_than(&b));
    assert!(!a.less_or_equal(&b));
    assert!(b.less_than(&a));
    assert!(b.less_or_equal(&a));
}

#[test]
fn equal_vectors_are_not_greater() {
    let a = vector(&[5, 5]);
    let b = vector(&[5, 5]);
    assert!(!a.greater_than(&b));
    assert!(a.greater_or_equal(&b));
    assert!(!a.less_than(&b));
    assert!(a.less_or_equal(&b));
}

#[test]
fn one_non_greater_lane_fails_greater_than() {
    let a = vector(&[5, 4]);
    let b = vector(&[4, 4]);
    assert!(!a.greater_than(&b));
    assert!(a.greater_or_equal(&b));
}

#[test]
fn longer_side_wins_after_shared_prefix() {
    let long = vector(&[5, 5, 5]);
    let short = vector(&[4, 4]);
    assert!(long.greater_than(&short));
    assert!(long.greater_or_equal(&short));

    let short_big = vector(&[9]);
    let long_small = vector(&[1, 1]);
    assert!(!short_big.greater_than(&long_small));
    assert!(!short_big.greater_or_equal(&long_small));
    assert!(short_big.less_than(&long_small));
}

#[test]
fn less_is_derived_by_negation() {
    let cases = [
        (vector(&[1, 5]), vector(&[2])),
        (vector(&[3]), vector(&[3, 0])),
        (vector(&[7, 7]), vector(&[7, 8])),
        (vector(&[0]), vector(&[0])),
    ];
    for (a, b) in cases.iter() {
        assert_eq!(a.less_than(b), !a.greater_or_equal(b));
        assert_eq!(a.less_or_equal(b), !a.greater_than(b));
    }
}

#[test]
fn ordering_is_not_total() {
    // Neither is greater, yet each is "less than" the other.
    let a = vector(&[1, 5]);
    let b = vector(&[2]);
    assert!(a.less_than(&b));
    assert!(b.less_than(&a));
}

#[test]
fn empty_sequences_are_not_greater() {
    assert!(!lanes::greater_than(&[], &[]));
    assert!(lanes::greater_or_equal(&[], &[]));
    assert!(lanes::greater_than(&[1], &[]));
}
