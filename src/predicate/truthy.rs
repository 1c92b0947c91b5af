//! Loose truthiness for flags that arrive as strings or numbers.

/// A value that can be interpreted as a boolean flag.
///
/// - `bool` is itself
/// - strings are true when equal to `"true"` (ASCII case-insensitive) or `"1"`
/// - integers are true when equal to `1`
/// - floats are true when their truncated value is `1`
/// - `Option` is false when `None`, otherwise delegates
///
/// # Examples
///
/// ```rust
/// use groundwork::predicate::Truthy;
///
/// assert!(true.is_true());
/// assert!("TRUE".is_true());
/// assert!("1".is_true());
/// assert!(1_u8.is_true());
/// assert!(1.7_f64.is_true());
///
/// assert!(!"yes".is_true());
/// assert!(!2_i32.is_true());
/// assert!(!None::<bool>.is_true());
/// ```
pub trait Truthy {
    /// Returns `true` if the value means `true`.
    fn is_true(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_true(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    #[inline]
    fn is_true(&self) -> bool {
        self.eq_ignore_ascii_case("true") || self == "1"
    }
}

impl Truthy for String {
    #[inline]
    fn is_true(&self) -> bool {
        self.as_str().is_true()
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_true(&self) -> bool {
                    *self == 1
                }
            }
        )*
    };
}

impl_truthy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_true(&self) -> bool {
                    self.trunc() == 1.0
                }
            }
        )*
    };
}

impl_truthy_for_float!(f32, f64);

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_true(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_true)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_true(&self) -> bool {
        (**self).is_true()
    }
}

/// Returns `true` if `values` is non-empty and every member is truthy.
///
/// # Examples
///
/// ```rust
/// use groundwork::predicate::is_all_true;
///
/// assert!(is_all_true(&[&true, &"1", &1_i64]));
/// assert!(!is_all_true(&[&true, &"0"]));
/// assert!(!is_all_true(&[]));
/// ```
pub fn is_all_true(values: &[&dyn Truthy]) -> bool {
    !values.is_empty() && values.iter().all(|value| value.is_true())
}

/// Interprets `value`, falling back to `default` when it is `None`.
///
/// # Examples
///
/// ```rust
/// use groundwork::predicate::is_true_or;
///
/// assert!(is_true_or(None::<&str>, true));
/// assert!(!is_true_or(Some("false"), true));
/// ```
pub fn is_true_or<T: Truthy>(value: Option<T>, default: bool) -> bool {
    value.map_or(default, |value| value.is_true())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", true)]
    #[case("True", true)]
    #[case("tRuE", true)]
    #[case("1", true)]
    #[case("01", false)]
    #[case(" true", false)]
    #[case("", false)]
    fn test_string_truthiness(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(input.is_true(), expected);
        assert_eq!(input.to_string().is_true(), expected);
    }

    #[rstest]
    #[case(1.0, true)]
    #[case(1.99, true)]
    #[case(0.99, false)]
    #[case(-1.0, false)]
    fn test_float_truncates(#[case] input: f64, #[case] expected: bool) {
        assert_eq!(input.is_true(), expected);
    }

    #[rstest]
    fn test_option_delegates() {
        assert!(Some(1_u32).is_true());
        assert!(!Some(0_u32).is_true());
        assert!(!None::<u32>.is_true());
    }
}
