//! String tokenization with delimiter fallback and bracket extraction.
//!
//! - [`split`]: Literal split on one delimiter, trailing empty segments dropped
//! - [`split_str`]: Split on the first of several candidate delimiters that
//!   actually cuts the text
//! - [`extract_content_in_brackets_mixed`]: Content of the first bracket pair,
//!   where ASCII and full-width brackets may be mixed
//!
//! All results borrow from the input text.
//!
//! # Examples
//!
//! ```rust
//! use groundwork::tokenize::{extract_content_in_brackets_mixed, split_str};
//!
//! // ";" is tried first and cuts the text, so "," is never tried.
//! assert_eq!(split_str("a,b;c", &[";", ","]), Some(vec!["a,b", "c"]));
//!
//! assert_eq!(extract_content_in_brackets_mixed("a(b)c"), Some("b"));
//! assert_eq!(extract_content_in_brackets_mixed("a（b)c"), Some("b"));
//! ```

mod brackets;

pub use brackets::BracketSet;
pub use brackets::extract_content_in_brackets;
pub use brackets::extract_content_in_brackets_mixed;

/// Splits `text` at every occurrence of `delimiter`.
///
/// The delimiter is matched literally. Trailing empty segments are dropped,
/// so a text made only of delimiters yields no segments. Leading and inner
/// empty segments are kept.
///
/// - Empty `text` yields an empty `Vec`.
/// - An empty `delimiter` never cuts; the result is `vec![text]`.
///
/// # Examples
///
/// ```rust
/// use groundwork::tokenize::split;
///
/// assert_eq!(split("a,,b,,", ","), vec!["a", "", "b"]);
/// assert_eq!(split(",a", ","), vec!["", "a"]);
/// assert_eq!(split("a.b", "."), vec!["a", "b"]);
/// assert!(split(",,,", ",").is_empty());
/// ```
pub fn split<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    if text.is_empty() {
        return Vec::new();
    }
    if delimiter.is_empty() {
        return vec![text];
    }

    let mut segments: Vec<&str> = text.split(delimiter).collect();
    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }
    segments
}

/// Splits `text` on the first candidate delimiter that produces more than one
/// segment.
///
/// Candidates are tried in order with [`split`]. If none of them cuts the
/// text into at least two segments, the result holds `text` unsplit.
///
/// Returns `None` if `text` is empty or `delimiters` is empty, which is
/// distinct from `Some(vec![text])` ("nothing split").
///
/// # Examples
///
/// ```rust
/// use groundwork::tokenize::split_str;
///
/// assert_eq!(split_str("a|b", &[",", "|"]), Some(vec!["a", "b"]));
/// assert_eq!(split_str("abc", &[";", ","]), Some(vec!["abc"]));
/// assert_eq!(split_str("", &[","]), None);
/// assert_eq!(split_str("abc", &[]), None);
/// ```
pub fn split_str<'a>(text: &'a str, delimiters: &[&str]) -> Option<Vec<&'a str>> {
    if text.is_empty() || delimiters.is_empty() {
        return None;
    }

    let accepted = delimiters.iter().find_map(|delimiter| {
        let segments = split(text, delimiter);
        (segments.len() > 1).then(|| {
            tracing::trace!(delimiter, segments = segments.len(), "split_str: delimiter accepted");
            segments
        })
    });
    Some(accepted.unwrap_or_else(|| vec![text]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a,b;c", &[";", ","], vec!["a,b", "c"])]
    #[case("a,b;c", &[",", ";"], vec!["a", "b;c"])]
    #[case("a,b", &["", ","], vec!["a", "b"])]
    #[case("a,", &[",", "-"], vec!["a,"])]
    #[case("a-,", &[",", "-"], vec!["a", ","])]
    #[case("abc", &[";", ","], vec!["abc"])]
    #[case("key::value", &["::"], vec!["key", "value"])]
    #[case("x.y", &["."], vec!["x", "y"])]
    fn test_split_str(
        #[case] text: &str,
        #[case] delimiters: &[&str],
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(split_str(text, delimiters), Some(expected));
    }

    #[rstest]
    fn test_split_str_not_applicable() {
        assert_eq!(split_str("", &[","]), None);
        assert_eq!(split_str("a,b", &[]), None);
    }

    #[rstest]
    #[case("", ",", vec![])]
    #[case("abc", "", vec!["abc"])]
    #[case("abc", ",", vec!["abc"])]
    #[case("a,b,c", ",", vec!["a", "b", "c"])]
    #[case("a，b", "，", vec!["a", "b"])]
    fn test_split(#[case] text: &str, #[case] delimiter: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split(text, delimiter), expected);
    }
}
