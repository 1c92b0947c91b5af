//! Splitting an ordered sequence into groups.
//!
//! Two policies are provided:
//!
//! - [`split_by_size`]: Groups of a fixed size; only the last group may be
//!   shorter.
//! - [`split_average`]: A fixed number of groups whose sizes differ by at most
//!   one element; the earliest groups take the remainder.
//!
//! Both are tolerant: an empty source, a zero size or a zero group count
//! yields an empty result. The checked variants [`try_split_by_size`] and
//! [`try_split_average`] report those cases as [`PartitionError`] instead.
//!
//! Groups are cloned out of the source; the source is never modified.
//!
//! # Examples
//!
//! ```rust
//! use groundwork::partition::{split_average, split_by_size};
//!
//! let source = [1, 2, 3, 4, 5];
//!
//! assert_eq!(
//!     split_by_size(&source, 2),
//!     vec![vec![1, 2], vec![3, 4], vec![5]]
//! );
//! assert_eq!(
//!     split_average(&source, 3),
//!     vec![vec![1, 2], vec![3, 4], vec![5]]
//! );
//! ```
//!
//! # Degenerate Branch
//!
//! When [`split_average`] is asked for more groups than there are elements,
//! it returns one singleton group per element rather than padding with empty
//! groups:
//!
//! ```rust
//! use groundwork::partition::split_average;
//!
//! assert_eq!(split_average(&['a', 'b'], 5), vec![vec!['a'], vec!['b']]);
//! ```

mod error;

pub use error::PartitionError;

use crate::predicate::Emptiness;

/// Splits `source` into consecutive groups of `size` elements.
///
/// The number of groups is `ceil(source.len() / size)`. Every group except
/// the last holds exactly `size` elements; the last holds the rest.
/// Concatenating the groups in order reconstructs `source`.
///
/// Returns an empty `Vec` if `source` is empty or `size` is zero.
///
/// # Examples
///
/// ```rust
/// use groundwork::partition::split_by_size;
///
/// assert_eq!(split_by_size(&[1, 2, 3], 5), vec![vec![1, 2, 3]]);
/// assert!(split_by_size(&[1, 2, 3], 0).is_empty());
/// assert!(split_by_size::<i32>(&[], 2).is_empty());
/// ```
pub fn split_by_size<T: Clone>(source: &[T], size: usize) -> Vec<Vec<T>> {
    if source.is_empty_value() || size < 1 {
        return Vec::new();
    }
    source.chunks(size).map(<[T]>::to_vec).collect()
}

/// Splits `source` into `number` groups whose sizes differ by at most one.
///
/// With `n = source.len()`, `q = n / number` and `r = n % number`:
///
/// - If `q > 0`, exactly `number` contiguous groups are produced. The first
///   `r` groups hold `q + 1` elements and the remaining ones hold `q`.
///   Concatenating the groups reconstructs `source`.
/// - If `q == 0` (more groups requested than elements), one singleton group
///   is produced per element, so the result has `n` groups rather than
///   `number`.
///
/// Returns an empty `Vec` if `source` is empty or `number` is zero.
///
/// # Examples
///
/// ```rust
/// use groundwork::partition::split_average;
///
/// let groups = split_average(&[1, 2, 3, 4, 5, 6, 7], 3);
/// assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5], vec![6, 7]]);
/// ```
pub fn split_average<T: Clone>(source: &[T], number: usize) -> Vec<Vec<T>> {
    if source.is_empty_value() || number < 1 {
        return Vec::new();
    }

    let quotient = source.len() / number;
    let remainder = source.len() % number;

    if quotient == 0 {
        tracing::debug!(
            requested = number,
            available = source.len(),
            "split_average: more groups than elements, emitting singletons"
        );
        return source[..remainder]
            .iter()
            .map(|element| vec![element.clone()])
            .collect();
    }

    let mut groups = Vec::with_capacity(number);
    let mut start = 0;
    for index in 0..number {
        let length = if index < remainder {
            quotient + 1
        } else {
            quotient
        };
        groups.push(source[start..start + length].to_vec());
        start += length;
    }
    debug_assert_eq!(start, source.len());
    groups
}

/// Like [`split_by_size`], but rejects degenerate input.
///
/// # Errors
///
/// - [`PartitionError::EmptySource`] if `source` is empty
/// - [`PartitionError::ZeroSize`] if `size` is zero
///
/// # Examples
///
/// ```rust
/// use groundwork::partition::{PartitionError, try_split_by_size};
///
/// assert_eq!(try_split_by_size(&[1, 2, 3], 2), Ok(vec![vec![1, 2], vec![3]]));
/// assert_eq!(try_split_by_size(&[1, 2, 3], 0), Err(PartitionError::ZeroSize));
/// ```
pub fn try_split_by_size<T: Clone>(
    source: &[T],
    size: usize,
) -> Result<Vec<Vec<T>>, PartitionError> {
    if source.is_empty_value() {
        return Err(PartitionError::EmptySource);
    }
    if size < 1 {
        return Err(PartitionError::ZeroSize);
    }
    Ok(split_by_size(source, size))
}

/// Like [`split_average`], but rejects degenerate input, including the
/// singleton branch.
///
/// On success the result always has exactly `number` groups.
///
/// # Errors
///
/// - [`PartitionError::EmptySource`] if `source` is empty
/// - [`PartitionError::ZeroGroups`] if `number` is zero
/// - [`PartitionError::MoreGroupsThanElements`] if `number > source.len()`
///
/// # Examples
///
/// ```rust
/// use groundwork::partition::{PartitionError, try_split_average};
///
/// assert_eq!(try_split_average(&[1, 2, 3], 3), Ok(vec![vec![1], vec![2], vec![3]]));
/// assert_eq!(
///     try_split_average(&[1, 2, 3], 4),
///     Err(PartitionError::MoreGroupsThanElements { requested: 4, available: 3 })
/// );
/// ```
pub fn try_split_average<T: Clone>(
    source: &[T],
    number: usize,
) -> Result<Vec<Vec<T>>, PartitionError> {
    if source.is_empty_value() {
        return Err(PartitionError::EmptySource);
    }
    if number < 1 {
        return Err(PartitionError::ZeroGroups);
    }
    if number > source.len() {
        return Err(PartitionError::MoreGroupsThanElements {
            requested: number,
            available: source.len(),
        });
    }
    Ok(split_average(source, number))
}
