#![cfg(feature = "relation")]
//! Property-based tests for set relations.
//!
//! Small value ranges are used so that inputs overlap often, and lengths
//! cross the linear-scan limit so both lookup strategies are exercised.

use groundwork::relation::{
    LINEAR_SCAN_LIMIT, deduplicate, difference, exist_intersection, intersection,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0_u8..40, 0..LINEAR_SCAN_LIMIT * 4)
}

fn has_duplicates(values: &[u8]) -> bool {
    let mut seen = HashSet::new();
    !values.iter().all(|value| seen.insert(value))
}

/// Quadratic reference for difference, mirroring the documented contract.
fn naive_difference(left: &[u8], right: &[u8]) -> Vec<u8> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }
    let mut result = Vec::new();
    for value in left {
        if !right.contains(value) && !result.contains(value) {
            result.push(*value);
        }
    }
    for value in right {
        if !left.contains(value) && !result.contains(value) {
            result.push(*value);
        }
    }
    result
}

/// Quadratic reference for intersection.
fn naive_intersection(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut result = Vec::new();
    for candidate in left {
        for value in right {
            if candidate == value && !result.contains(candidate) {
                result.push(*candidate);
            }
        }
    }
    result
}

// =============================================================================
// Reference Laws
// Description: The size-adaptive implementations match the quadratic ones
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_matches_reference(left in sequence(), right in sequence()) {
        prop_assert_eq!(difference(&left, &right), naive_difference(&left, &right));
    }

    #[test]
    fn prop_intersection_matches_reference(left in sequence(), right in sequence()) {
        prop_assert_eq!(intersection(&left, &right), naive_intersection(&left, &right));
    }
}

// =============================================================================
// Uniqueness Laws
// Description: Results never contain duplicates when both inputs are non-empty
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_has_no_duplicates(
        left in prop::collection::vec(0_u8..40, 1..64),
        right in prop::collection::vec(0_u8..40, 1..64)
    ) {
        prop_assert!(!has_duplicates(&difference(&left, &right)));
    }

    #[test]
    fn prop_intersection_has_no_duplicates(left in sequence(), right in sequence()) {
        prop_assert!(!has_duplicates(&intersection(&left, &right)));
    }

    #[test]
    fn prop_deduplicate_keeps_first_occurrences(source in sequence()) {
        let unique = deduplicate(&source);
        let expected_set: HashSet<u8> = source.iter().copied().collect();

        prop_assert!(!has_duplicates(&unique));
        prop_assert_eq!(unique.len(), expected_set.len());
    }
}

// =============================================================================
// Symmetry and Subset Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_is_symmetric_as_a_set(
        left in prop::collection::vec(0_u8..40, 1..64),
        right in prop::collection::vec(0_u8..40, 1..64)
    ) {
        let forward: HashSet<u8> = difference(&left, &right).into_iter().collect();
        let backward: HashSet<u8> = difference(&right, &left).into_iter().collect();

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_intersection_is_subset_of_both(left in sequence(), right in sequence()) {
        for value in intersection(&left, &right) {
            prop_assert!(left.contains(&value));
            prop_assert!(right.contains(&value));
        }
    }
}

// =============================================================================
// Existence Law
// Description: exist_intersection agrees with intersection for any sizes
// =============================================================================

proptest! {
    #[test]
    fn prop_exist_intersection_agrees_with_intersection(left in sequence(), right in sequence()) {
        let expected = !intersection(&left, &right).is_empty();

        prop_assert_eq!(exist_intersection(&left, &right), expected);
        prop_assert_eq!(exist_intersection(&right, &left), expected);
    }
}
