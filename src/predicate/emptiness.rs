//! The `Emptiness` and `Length` capabilities.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A value that can report whether it is semantically empty.
///
/// Containers are empty when they hold no elements, strings when they hold
/// no characters, and `Option` when it is `None` or wraps an empty value.
/// Scalars (numbers, `bool`, `char`) are never empty.
///
/// The method is deliberately not named `is_empty`, so that it never competes
/// with inherent `is_empty` methods during method resolution.
///
/// # Examples
///
/// ```rust
/// use groundwork::predicate::Emptiness;
///
/// assert!("".is_empty_value());
/// assert!(Vec::<i32>::new().is_empty_value());
/// assert!(None::<String>.is_empty_value());
/// assert!(Some(String::new()).is_empty_value());
///
/// assert!(Some("text").is_not_empty_value());
/// assert!(0_i32.is_not_empty_value());
/// ```
pub trait Emptiness {
    /// Returns `true` if the value is semantically empty.
    fn is_empty_value(&self) -> bool;

    /// Returns `true` if the value is not semantically empty.
    #[inline]
    fn is_not_empty_value(&self) -> bool {
        !self.is_empty_value()
    }
}

/// A value that can report its length.
///
/// For strings the length is the UTF-8 byte length, matching [`str::len`].
/// `Option` reports `0` for `None`.
///
/// # Examples
///
/// ```rust
/// use groundwork::predicate::Length;
///
/// assert_eq!(vec![1, 2, 3].length(), 3);
/// assert_eq!(None::<Vec<i32>>.length(), 0);
/// assert_eq!("abc".length(), 3);
/// ```
pub trait Length {
    /// Returns the number of elements.
    fn length(&self) -> usize;
}

// =============================================================================
// Strings
// =============================================================================

impl Emptiness for str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Length for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl Emptiness for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Length for String {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl Emptiness for Cow<'_, str> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Length for Cow<'_, str> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Sequences and Collections
// =============================================================================

macro_rules! impl_for_collection {
    ($([$($generics:tt)*] $collection:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Emptiness for $collection {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }

            impl<$($generics)*> Length for $collection {
                #[inline]
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_for_collection!(
    [T] [T],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
);

impl<T, const N: usize> Emptiness for [T; N] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T, const N: usize> Length for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

// =============================================================================
// Option and Pointers
// =============================================================================

impl<T: Emptiness> Emptiness for Option<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Emptiness::is_empty_value)
    }
}

impl<T: Length> Length for Option<T> {
    #[inline]
    fn length(&self) -> usize {
        self.as_ref().map_or(0, Length::length)
    }
}

macro_rules! impl_for_pointer {
    ($($pointer:ident),* $(,)?) => {
        $(
            impl<T: Emptiness + ?Sized> Emptiness for $pointer<T> {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    (**self).is_empty_value()
                }
            }

            impl<T: Length + ?Sized> Length for $pointer<T> {
                #[inline]
                fn length(&self) -> usize {
                    (**self).length()
                }
            }
        )*
    };
}

impl_for_pointer!(Box, Rc, Arc);

impl<T: Emptiness + ?Sized> Emptiness for &T {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Length + ?Sized> Length for &T {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

// =============================================================================
// Scalars
// =============================================================================

macro_rules! impl_never_empty {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Emptiness for $scalar {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_never_empty!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// =============================================================================
// Variadic Checks
// =============================================================================

/// Returns `true` if `values` is non-empty and none of its members is empty.
///
/// # Examples
///
/// ```rust
/// use groundwork::predicate::no_empty;
///
/// assert!(no_empty(&[&"a", &vec![1], &Some(3)]));
/// assert!(!no_empty(&[&"a", &""]));
/// assert!(!no_empty(&[]));
/// ```
pub fn no_empty(values: &[&dyn Emptiness]) -> bool {
    !values.is_empty() && values.iter().all(|value| value.is_not_empty_value())
}

/// Returns `true` if `values` is empty or any of its members is empty.
///
/// This is the exact negation of [`no_empty`].
pub fn exist_empty(values: &[&dyn Emptiness]) -> bool {
    !no_empty(values)
}

/// Returns `true` if `values` holds both empty and non-empty members.
///
/// # Examples
///
/// ```rust
/// use groundwork::predicate::part_empty;
///
/// assert!(part_empty(&[&"a", &""]));
/// assert!(!part_empty(&[&"a", &"b"]));
/// assert!(!part_empty(&[&"", &""]));
/// assert!(!part_empty(&[]));
/// ```
pub fn part_empty(values: &[&dyn Emptiness]) -> bool {
    let (mut saw_empty, mut saw_filled) = (false, false);
    for value in values {
        if value.is_empty_value() {
            saw_empty = true;
        } else {
            saw_filled = true;
        }
        if saw_empty && saw_filled {
            return true;
        }
    }
    false
}

/// Returns `true` if at least one member of `values` is not empty.
pub fn not_all_empty(values: &[&dyn Emptiness]) -> bool {
    values.iter().any(|value| value.is_not_empty_value())
}

/// Returns `true` if `values` is empty or every member is empty.
///
/// This is the exact negation of [`not_all_empty`].
pub fn all_empty(values: &[&dyn Emptiness]) -> bool {
    !not_all_empty(values)
}

/// Returns the first member of `values` that is not empty.
///
/// # Examples
///
/// ```rust
/// use groundwork::predicate::first_non_empty;
///
/// assert_eq!(first_non_empty(&["", "fallback", "other"]), Some(&"fallback"));
/// assert_eq!(first_non_empty::<Vec<i32>>(&[vec![], vec![]]), None);
/// ```
pub fn first_non_empty<T: Emptiness>(values: &[T]) -> Option<&T> {
    values.iter().find(|value| value.is_not_empty_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_strings() {
        assert!("".is_empty_value());
        assert!(String::new().is_empty_value());
        assert!(Cow::Borrowed("").is_empty_value());
        assert!(" ".is_not_empty_value());
        assert_eq!("日本".length(), 6);
    }

    #[rstest]
    fn test_collections() {
        assert!(HashMap::<i32, i32>::new().is_empty_value());
        assert!(BTreeSet::<i32>::new().is_empty_value());
        assert!(VecDeque::from([1]).is_not_empty_value());
        assert_eq!(BTreeMap::from([(1, 2), (3, 4)]).length(), 2);
    }

    #[rstest]
    fn test_fixed_size_arrays() {
        let empty: [u8; 0] = [];
        assert!(empty.is_empty_value());
        assert!([1, 2, 3].is_not_empty_value());
        assert_eq!([0_u8; 4].length(), 4);
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(vec![]), true)]
    #[case(Some(vec![1]), false)]
    fn test_option_delegates(#[case] value: Option<Vec<i32>>, #[case] expected: bool) {
        assert_eq!(value.is_empty_value(), expected);
    }

    #[rstest]
    fn test_pointers_delegate() {
        assert!(Box::new(String::new()).is_empty_value());
        assert!(Rc::new(vec![1]).is_not_empty_value());
        let shared: Arc<str> = Arc::from("x");
        assert_eq!(shared.length(), 1);
    }

    #[rstest]
    fn test_scalars_are_never_empty() {
        assert!(0_u8.is_not_empty_value());
        assert!(false.is_not_empty_value());
        assert!(0.0_f64.is_not_empty_value());
    }

    #[rstest]
    fn test_variadic_checks_on_empty_list() {
        assert!(!no_empty(&[]));
        assert!(exist_empty(&[]));
        assert!(!part_empty(&[]));
        assert!(all_empty(&[]));
        assert!(!not_all_empty(&[]));
    }

    #[rstest]
    fn test_variadic_checks_on_mixed_values() {
        let tags: Vec<u8> = Vec::new();
        let values: [&dyn Emptiness; 3] = [&"name", &tags, &42];

        assert!(!no_empty(&values));
        assert!(exist_empty(&values));
        assert!(part_empty(&values));
        assert!(!all_empty(&values));
        assert!(not_all_empty(&values));
    }
}
