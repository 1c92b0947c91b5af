//! Null-safe helpers for hash maps.
//!
//! All functions borrow their inputs and return new maps; the hasher type
//! of the input is kept.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::predicate::Emptiness;

/// Merges `first` and `second` into a new map. On key collisions the value
/// from `second` wins.
///
/// # Examples
///
/// ```rust
/// use groundwork::mapping::merge;
/// use std::collections::HashMap;
///
/// let defaults = HashMap::from([("timeout", 30), ("retries", 3)]);
/// let overrides = HashMap::from([("timeout", 5)]);
///
/// let merged = merge(&defaults, &overrides);
/// assert_eq!(merged, HashMap::from([("timeout", 5), ("retries", 3)]));
/// ```
pub fn merge<K, V, S>(first: &HashMap<K, V, S>, second: &HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    let mut merged = HashMap::with_capacity_and_hasher(first.len() + second.len(), S::default());
    for (key, value) in first.iter().chain(second) {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Returns the entries of `map` for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use groundwork::mapping::filter_entries;
/// use std::collections::HashMap;
///
/// let stock = HashMap::from([("apple", 0), ("pear", 4)]);
/// let available = filter_entries(&stock, |_, count| *count > 0);
/// assert_eq!(available, HashMap::from([("pear", 4)]));
/// ```
pub fn filter_entries<K, V, S, P>(map: &HashMap<K, V, S>, mut predicate: P) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
    P: FnMut(&K, &V) -> bool,
{
    if map.is_empty_value() {
        return HashMap::with_hasher(S::default());
    }
    map.iter()
        .filter(|&(key, value)| predicate(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns the value stored for `key`, or `default` if there is none.
///
/// # Examples
///
/// ```rust
/// use groundwork::mapping::get_or_default;
/// use std::collections::HashMap;
///
/// let labels = HashMap::from([(String::from("en"), "Hello")]);
/// assert_eq!(*get_or_default(&labels, "en", &"?"), "Hello");
/// assert_eq!(*get_or_default(&labels, "fr", &"?"), "?");
/// ```
pub fn get_or_default<'a, K, V, S, Q>(map: &'a HashMap<K, V, S>, key: &Q, default: &'a V) -> &'a V
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    map.get(key).unwrap_or(default)
}
