//! Null-safe helpers for ordered sequences.
//!
//! - [`flatten`]: Concatenate groups back into one sequence
//! - [`first_n`]: Leading elements, `None` for an empty source
//! - [`like`]: Whether any string contains a fragment
//! - [`join_present`]: Join the present members of a list of optional strings
//! - [`map_distinct`]: Map and keep the first occurrence of each result
//! - [`push_if_not_empty`]: Append only semantically non-empty values
//!
//! # Examples
//!
//! ```rust
//! use groundwork::partition::split_by_size;
//! use groundwork::sequence::flatten;
//!
//! let source = vec![1, 2, 3, 4, 5];
//! assert_eq!(flatten(&split_by_size(&source, 2)), source);
//! ```

use std::hash::Hash;

use crate::predicate::Emptiness;
use crate::relation::deduplicate;

/// Concatenates `groups` in order.
///
/// # Examples
///
/// ```rust
/// use groundwork::sequence::flatten;
///
/// assert_eq!(flatten(&[vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
/// ```
pub fn flatten<T, G>(groups: &[G]) -> Vec<T>
where
    T: Clone,
    G: AsRef<[T]>,
{
    let total = groups.iter().map(|group| group.as_ref().len()).sum();
    let mut result = Vec::with_capacity(total);
    for group in groups {
        result.extend_from_slice(group.as_ref());
    }
    result
}

/// Returns at most `count` leading elements of `source`.
///
/// Returns `None` if `source` is empty, so "no source" stays distinguishable
/// from "asked for zero elements".
///
/// # Examples
///
/// ```rust
/// use groundwork::sequence::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), Some(vec![1, 2]));
/// assert_eq!(first_n(&[1, 2, 3], 10), Some(vec![1, 2, 3]));
/// assert_eq!(first_n::<i32>(&[], 2), None);
/// ```
pub fn first_n<T: Clone>(source: &[T], count: usize) -> Option<Vec<T>> {
    if source.is_empty_value() {
        return None;
    }
    Some(source[..count.min(source.len())].to_vec())
}

/// Returns `true` if any member of `pool` contains `fragment`.
///
/// Returns `false` if `fragment` is empty.
///
/// # Examples
///
/// ```rust
/// use groundwork::sequence::like;
///
/// assert!(like(&["alpha", "beta"], "et"));
/// assert!(!like(&["alpha", "beta"], ""));
/// ```
pub fn like<S: AsRef<str>>(pool: &[S], fragment: &str) -> bool {
    if fragment.is_empty_value() {
        return false;
    }
    pool.iter().any(|member| member.as_ref().contains(fragment))
}

/// Joins the `Some` members of `items` with `joiner`, skipping `None`.
///
/// # Examples
///
/// ```rust
/// use groundwork::sequence::join_present;
///
/// assert_eq!(join_present(&[Some("a"), None, Some(""), Some("b")], "-"), "a--b");
/// assert_eq!(join_present::<&str>(&[None, None], "-"), "");
/// ```
pub fn join_present<S: AsRef<str>>(items: &[Option<S>], joiner: &str) -> String {
    let present: Vec<&str> = items.iter().flatten().map(|item| item.as_ref()).collect();
    present.join(joiner)
}

/// Maps every element and keeps the first occurrence of each result.
///
/// # Examples
///
/// ```rust
/// use groundwork::sequence::map_distinct;
///
/// let words = ["apple", "avocado", "banana"];
/// let initials = map_distinct(&words, |word| word.chars().next());
/// assert_eq!(initials, vec![Some('a'), Some('b')]);
/// ```
pub fn map_distinct<T, R, F>(source: &[T], mapper: F) -> Vec<R>
where
    R: Eq + Hash + Clone,
    F: FnMut(&T) -> R,
{
    let mapped: Vec<R> = source.iter().map(mapper).collect();
    deduplicate(&mapped)
}

/// Appends `element` to `target` unless it is semantically empty.
///
/// Returns whether the element was appended.
///
/// # Examples
///
/// ```rust
/// use groundwork::sequence::push_if_not_empty;
///
/// let mut names = Vec::new();
/// assert!(push_if_not_empty(&mut names, String::from("ada")));
/// assert!(!push_if_not_empty(&mut names, String::new()));
/// assert_eq!(names, vec!["ada"]);
/// ```
pub fn push_if_not_empty<T: Emptiness>(target: &mut Vec<T>, element: T) -> bool {
    if element.is_empty_value() {
        return false;
    }
    target.push(element);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_flatten_accepts_slices_and_arrays() {
        let groups: [&[u8]; 2] = [&[1, 2], &[3]];
        assert_eq!(flatten(&groups), vec![1, 2, 3]);
        assert!(flatten::<u8, Vec<u8>>(&[]).is_empty());
    }

    #[rstest]
    fn test_first_n_zero_count() {
        assert_eq!(first_n(&[1], 0), Some(vec![]));
    }

    #[rstest]
    #[case(&["alpha", "beta"], "ph", true)]
    #[case(&["alpha", "beta"], "z", false)]
    #[case(&[], "a", false)]
    fn test_like(#[case] pool: &[&str], #[case] fragment: &str, #[case] expected: bool) {
        assert_eq!(like(pool, fragment), expected);
    }

    #[rstest]
    fn test_push_if_not_empty_with_nested_options() {
        let mut values: Vec<Option<Vec<i32>>> = Vec::new();
        assert!(!push_if_not_empty(&mut values, None));
        assert!(!push_if_not_empty(&mut values, Some(vec![])));
        assert!(push_if_not_empty(&mut values, Some(vec![1])));
        assert_eq!(values.len(), 1);
    }
}
