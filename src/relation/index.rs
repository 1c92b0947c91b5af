//! Membership lookups and order-preserving unique accumulation.
//!
//! Small inputs are answered by linear scans, large inputs by a hash index
//! over borrowed elements. The choice never changes an observable result.

use std::collections::HashSet;
use std::hash::Hash;

use static_assertions::const_assert;

/// Inputs with at most this many elements are scanned linearly instead of
/// being indexed in a hash set.
pub const LINEAR_SCAN_LIMIT: usize = 16;

const_assert!(LINEAR_SCAN_LIMIT > 0);

// =============================================================================
// Hasher Selection
// =============================================================================

/// Build hasher for internal hash indexes.
///
/// `fxhash` selects `rustc_hash::FxBuildHasher`, `ahash` selects
/// `ahash::RandomState`; `fxhash` wins when both are enabled.
#[cfg(feature = "fxhash")]
pub(crate) type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type IndexHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type IndexHasher = std::collections::hash_map::RandomState;

/// A hash set of borrowed elements using [`IndexHasher`].
pub(crate) type HashIndex<'a, T> = HashSet<&'a T, IndexHasher>;

/// Builds a [`HashIndex`] over every element of `elements`.
pub(crate) fn hash_index<T: Eq + Hash>(elements: &[T]) -> HashIndex<'_, T> {
    let mut index = HashIndex::with_capacity_and_hasher(elements.len(), IndexHasher::default());
    index.extend(elements);
    index
}

// =============================================================================
// Membership
// =============================================================================

/// Answers "does this sequence contain the value?".
pub(crate) enum Membership<'a, T> {
    Linear(&'a [T]),
    Indexed(HashIndex<'a, T>),
}

impl<'a, T: Eq + Hash> Membership<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        if elements.len() <= LINEAR_SCAN_LIMIT {
            Self::Linear(elements)
        } else {
            tracing::trace!(length = elements.len(), "indexing sequence for membership lookups");
            Self::Indexed(hash_index(elements))
        }
    }

    #[inline]
    pub(crate) fn contains(&self, value: &T) -> bool {
        match self {
            Self::Linear(elements) => elements.contains(value),
            Self::Indexed(index) => index.contains(value),
        }
    }
}

// =============================================================================
// UniqueAccumulator
// =============================================================================

/// Collects cloned values in push order, skipping values already collected.
pub(crate) struct UniqueAccumulator<'a, T> {
    result: Vec<T>,
    seen: Option<HashIndex<'a, T>>,
}

impl<'a, T: Eq + Hash + Clone> UniqueAccumulator<'a, T> {
    /// Creates an accumulator sized for at most `capacity` pushes.
    pub(crate) fn new(capacity: usize) -> Self {
        let seen = (capacity > LINEAR_SCAN_LIMIT)
            .then(|| HashIndex::with_capacity_and_hasher(capacity, IndexHasher::default()));
        Self {
            result: Vec::new(),
            seen,
        }
    }

    /// Appends `value` unless an equal value was appended before.
    pub(crate) fn push(&mut self, value: &'a T) {
        let is_new = match &mut self.seen {
            Some(seen) => seen.insert(value),
            None => !self.result.contains(value),
        };
        if is_new {
            self.result.push(value.clone());
        }
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.result
    }
}
