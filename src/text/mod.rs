//! Null-safe string helpers.
//!
//! Character positions and widths in this module count `char`s (Unicode
//! scalar values), never bytes, so none of these functions can split a
//! multi-byte character. Case checks use Unicode character properties and
//! are not locale-aware.
//!
//! # Examples
//!
//! ```rust
//! use groundwork::text::{is_blank, left_pad, substring, to_snake_case};
//!
//! assert!(is_blank(" \t\n"));
//! assert_eq!(left_pad("7", 3, '0'), "007");
//! assert_eq!(substring("héllo", 1, 3), "él");
//! assert_eq!(to_snake_case("requestId"), "request_id");
//! ```

use std::borrow::Cow;
use std::fmt::{Display, Write};

use crate::predicate::Emptiness;

// =============================================================================
// Blank Checks
// =============================================================================

/// Returns `true` if `text` is empty or only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Returns `true` if `text` has at least one non-whitespace character.
pub fn is_not_blank(text: &str) -> bool {
    !is_blank(text)
}

/// Trims `text`, returning `None` if nothing is left.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::trim_to_none;
///
/// assert_eq!(trim_to_none("  id  "), Some("id"));
/// assert_eq!(trim_to_none("   "), None);
/// ```
pub fn trim_to_none(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    trimmed.is_not_empty_value().then_some(trimmed)
}

/// Returns the first member of `values` that is not blank, untrimmed, or
/// `""` if there is none.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::first_non_blank;
///
/// assert_eq!(first_non_blank(&["", "  ", " name "]), " name ");
/// assert_eq!(first_non_blank(&[" "]), "");
/// ```
pub fn first_non_blank<'a>(values: &[&'a str]) -> &'a str {
    values
        .iter()
        .copied()
        .find(|value| is_not_blank(value))
        .unwrap_or("")
}

// =============================================================================
// Joining and Trimming
// =============================================================================

/// Joins the `Display` form of every item with `separator`.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::join;
///
/// assert_eq!(join(", ", [1, 2, 3]), "1, 2, 3");
/// assert_eq!(join(", ", Vec::<u8>::new()), "");
/// ```
pub fn join<I>(separator: &str, items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut joined = String::new();
    for (index, item) in items.into_iter().enumerate() {
        if index != 0 {
            joined.push_str(separator);
        }
        // Writing into a `String` cannot fail.
        let _ = write!(joined, "{item}");
    }
    joined
}

/// Removes one trailing `tail` from `text`, if present.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::cut_tail;
///
/// assert_eq!(cut_tail("report.csv.csv", ".csv"), "report.csv");
/// assert_eq!(cut_tail("report", ".csv"), "report");
/// ```
pub fn cut_tail<'a>(text: &'a str, tail: &str) -> &'a str {
    text.strip_suffix(tail).unwrap_or(text)
}

// =============================================================================
// Searching
// =============================================================================

/// Returns `true` if `text` contains any of `parts`.
///
/// Returns `false` if `text` or `parts` is empty.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::contains_any;
///
/// assert!(contains_any("error: disk full", &["warn", "error"]));
/// assert!(!contains_any("", &["a"]));
/// ```
pub fn contains_any<S: AsRef<str>>(text: &str, parts: &[S]) -> bool {
    if text.is_empty_value() || parts.is_empty_value() {
        return false;
    }
    parts.iter().any(|part| text.contains(part.as_ref()))
}

/// Returns `true` if `text` contains a character encoded in four UTF-8 bytes
/// (outside the Basic Multilingual Plane, e.g. most emoji).
///
/// # Examples
///
/// ```rust
/// use groundwork::text::contains_four_bytes_char;
///
/// assert!(contains_four_bytes_char("ok 👍"));
/// assert!(!contains_four_bytes_char("中文"));
/// ```
pub fn contains_four_bytes_char(text: &str) -> bool {
    text.bytes().any(|byte| (byte & 0xF8) == 0xF0)
}

// =============================================================================
// Slicing and Padding
// =============================================================================

/// Returns the characters of `text` in `[start, end)`.
///
/// Reversed bounds are swapped and both bounds are clamped to the character
/// count, so this never panics.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::substring;
///
/// assert_eq!(substring("abcdef", 4, 1), "bcd");
/// assert_eq!(substring("abc", 1, 99), "bc");
/// assert_eq!(substring("abc", 5, 9), "");
/// ```
pub fn substring(text: &str, start: usize, end: usize) -> &str {
    let (start, end) = if end < start { (end, start) } else { (start, end) };
    let byte_offset = |position: usize| {
        text.char_indices()
            .nth(position)
            .map_or(text.len(), |(offset, _)| offset)
    };
    let begin = byte_offset(start);
    let finish = byte_offset(end);
    &text[begin..finish]
}

/// Pads `text` on the left with `padding` up to `width` characters.
pub fn left_pad(text: &str, width: usize, padding: char) -> String {
    let missing = width.saturating_sub(text.chars().count());
    let mut padded = String::with_capacity(text.len() + missing * padding.len_utf8());
    padded.extend(std::iter::repeat_n(padding, missing));
    padded.push_str(text);
    padded
}

/// Pads `text` on the right with `padding` up to `width` characters.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::right_pad;
///
/// assert_eq!(right_pad("ab", 4, '.'), "ab..");
/// assert_eq!(right_pad("abcdef", 4, '.'), "abcdef");
/// ```
pub fn right_pad(text: &str, width: usize, padding: char) -> String {
    let missing = width.saturating_sub(text.chars().count());
    let mut padded = String::with_capacity(text.len() + missing * padding.len_utf8());
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(padding, missing));
    padded
}

// =============================================================================
// Case
// =============================================================================

/// Converts `camelCase` to `snake_case`.
///
/// Every uppercase character becomes `_` followed by its lowercase form,
/// except at the very start. Text that already contains `_` is returned
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::to_snake_case;
///
/// assert_eq!(to_snake_case("UserName"), "user_name");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
pub fn to_snake_case(text: &str) -> Cow<'_, str> {
    if text.is_empty() || text.contains('_') {
        return Cow::Borrowed(text);
    }

    let mut snake = String::with_capacity(text.len() + text.len() / 2);
    for character in text.chars() {
        if character.is_uppercase() {
            if !snake.is_empty() {
                snake.push('_');
            }
            snake.extend(character.to_lowercase());
        } else {
            snake.push(character);
        }
    }
    Cow::Owned(snake)
}

/// Returns `true` if the first character of `text` is lowercase.
pub fn starts_with_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

/// Returns `true` if the first character of `text` is uppercase.
pub fn starts_with_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

/// Uppercases the first character of `text` if it is lowercase.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::capitalize_first_letter;
///
/// assert_eq!(capitalize_first_letter("name"), "Name");
/// assert_eq!(capitalize_first_letter("Name"), "Name");
/// assert_eq!(capitalize_first_letter("ßtraße"), "SStraße");
/// ```
pub fn capitalize_first_letter(text: &str) -> Cow<'_, str> {
    let mut characters = text.chars();
    match characters.next() {
        Some(first) if first.is_lowercase() => {
            Cow::Owned(first.to_uppercase().chain(characters).collect())
        }
        _ => Cow::Borrowed(text),
    }
}

/// Lowercases the first character of `text` if it is uppercase.
pub fn decapitalize_first_letter(text: &str) -> Cow<'_, str> {
    let mut characters = text.chars();
    match characters.next() {
        Some(first) if first.is_uppercase() => {
            Cow::Owned(first.to_lowercase().chain(characters).collect())
        }
        _ => Cow::Borrowed(text),
    }
}

// =============================================================================
// Numeric Checks
// =============================================================================

/// Returns `true` if `text`, ignoring surrounding whitespace, parses as a
/// floating-point number.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::is_number;
///
/// assert!(is_number(" 3.5e2 "));
/// assert!(is_number("-7"));
/// assert!(!is_number("3,5"));
/// ```
pub fn is_number(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok()
}

/// Returns `true` if `text` parses as a 32-bit signed integer.
///
/// # Examples
///
/// ```rust
/// use groundwork::text::is_integer;
///
/// assert!(is_integer("+42"));
/// assert!(!is_integer("2147483648"));
/// assert!(!is_integer(" 1"));
/// ```
pub fn is_integer(text: &str) -> bool {
    text.parse::<i32>().is_ok()
}
