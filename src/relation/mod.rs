//! Set relations between ordered sequences.
//!
//! This module answers set questions about two `&[T]` without changing the
//! ordering contract callers rely on:
//!
//! - [`difference`]: Values present in exactly one of the two sequences
//! - [`intersection`]: Values present in both sequences
//! - [`exist_intersection`]: Whether any value is shared
//! - [`deduplicate`]: First occurrence of each value
//!
//! Results never contain duplicates and follow the order in which values
//! first appear in the inputs.
//!
//! # Time Complexity
//!
//! | Operation            | n, m <= 16 | larger inputs  |
//! |----------------------|------------|----------------|
//! | `difference`         | O(n * m)   | O(n + m)       |
//! | `intersection`       | O(n * m)   | O(n + m)       |
//! | `exist_intersection` | O(n + m)   | O(n + m)       |
//! | `deduplicate`        | O(n²)      | O(n)           |
//!
//! Inputs above [`LINEAR_SCAN_LIMIT`] elements are indexed in a hash set
//! (see the `fxhash` and `ahash` features). Small inputs are scanned
//! linearly. Both paths return identical results.
//!
//! # Examples
//!
//! ```rust
//! use groundwork::relation::{difference, exist_intersection, intersection};
//!
//! let left = [1, 2, 2, 3];
//! let right = [3, 4, 4];
//!
//! assert_eq!(difference(&left, &right), vec![1, 2, 4]);
//! assert_eq!(intersection(&left, &right), vec![3]);
//! assert!(exist_intersection(&left, &right));
//! ```

mod index;

pub use index::LINEAR_SCAN_LIMIT;

use std::hash::Hash;

use crate::predicate::Emptiness;
use index::{Membership, UniqueAccumulator, hash_index};

/// Returns the values present in exactly one of `left` and `right`.
///
/// The values of `left` missing from `right` come first, in `left`'s order,
/// followed by the values of `right` missing from `left`, in `right`'s order.
/// Each value appears once.
///
/// If one side is empty the other side is returned unchanged, duplicates
/// included.
///
/// # Examples
///
/// ```rust
/// use groundwork::relation::difference;
///
/// assert_eq!(difference(&["a", "b", "a"], &["b", "c"]), vec!["a", "c"]);
/// assert_eq!(difference(&[], &[1, 1, 2]), vec![1, 1, 2]);
/// assert!(difference(&[1, 2], &[2, 1]).is_empty());
/// ```
pub fn difference<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty_value() {
        return right.to_vec();
    }
    if right.is_empty_value() {
        return left.to_vec();
    }

    let left_members = Membership::new(left);
    let right_members = Membership::new(right);
    let mut accumulator = UniqueAccumulator::new(left.len() + right.len());

    for element in left {
        if !right_members.contains(element) {
            accumulator.push(element);
        }
    }
    for element in right {
        if !left_members.contains(element) {
            accumulator.push(element);
        }
    }
    accumulator.into_vec()
}

/// Returns the values present in both `left` and `right`.
///
/// The result follows `left`'s order and contains each shared value once,
/// however often it repeats in either input.
///
/// # Examples
///
/// ```rust
/// use groundwork::relation::intersection;
///
/// assert_eq!(intersection(&[4, 1, 4, 2], &[2, 4, 4]), vec![4, 2]);
/// assert!(intersection(&[1], &[]).is_empty());
/// ```
pub fn intersection<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty_value() || right.is_empty_value() {
        return Vec::new();
    }

    let right_members = Membership::new(right);
    let mut accumulator = UniqueAccumulator::new(left.len());

    for element in left {
        if right_members.contains(element) {
            accumulator.push(element);
        }
    }
    accumulator.into_vec()
}

/// Returns `true` if `left` and `right` share at least one value.
///
/// The smaller sequence (`left` on ties) is indexed in a hash set and the
/// larger one is scanned until the first hit. The answer always equals
/// `!intersection(left, right).is_empty()`.
///
/// # Examples
///
/// ```rust
/// use groundwork::relation::exist_intersection;
///
/// assert!(exist_intersection(&[1, 2, 3], &[9, 8, 3]));
/// assert!(!exist_intersection(&[1, 2, 3], &[4]));
/// assert!(!exist_intersection::<i32>(&[], &[]));
/// ```
pub fn exist_intersection<T: Eq + Hash>(left: &[T], right: &[T]) -> bool {
    if left.is_empty_value() || right.is_empty_value() {
        return false;
    }

    let (smaller, larger) = if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    };

    let index = hash_index(smaller);
    larger.iter().any(|element| index.contains(element))
}

/// Returns `true` if `sequence` contains any of `candidates`.
///
/// Convenience form of [`exist_intersection`] for an explicit candidate
/// list. Returns `false` if `candidates` is empty.
///
/// # Examples
///
/// ```rust
/// use groundwork::relation::exist_intersection_any;
///
/// let roles = vec!["reader", "editor"];
/// assert!(exist_intersection_any(&roles, &["admin", "editor"]));
/// assert!(!exist_intersection_any(&roles, &[]));
/// ```
pub fn exist_intersection_any<T: Eq + Hash>(sequence: &[T], candidates: &[T]) -> bool {
    if candidates.is_empty_value() {
        return false;
    }
    exist_intersection(sequence, candidates)
}

/// Returns the first occurrence of each value of `source`, in order.
///
/// # Examples
///
/// ```rust
/// use groundwork::relation::deduplicate;
///
/// assert_eq!(deduplicate(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn deduplicate<T: Eq + Hash + Clone>(source: &[T]) -> Vec<T> {
    let mut accumulator = UniqueAccumulator::new(source.len());
    for element in source {
        accumulator.push(element);
    }
    accumulator.into_vec()
}
