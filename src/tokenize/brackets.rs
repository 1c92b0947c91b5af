//! Bracket content extraction.

use static_assertions::const_assert;

/// Two sets of bracket glyphs matched as a single logical bracket type.
///
/// Any glyph of `left` opens, any glyph of `right` closes, regardless of
/// which glyph opened.
///
/// # Examples
///
/// ```rust
/// use groundwork::tokenize::{BracketSet, extract_content_in_brackets};
///
/// const SQUARE: BracketSet = BracketSet::new(&['[', '【'], &[']', '】']);
/// assert_eq!(extract_content_in_brackets("tag【v2]", &SQUARE), Some("v2"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketSet {
    left: &'static [char],
    right: &'static [char],
}

impl BracketSet {
    /// ASCII `(` `)` together with full-width `（` `）`.
    pub const MIXED: Self = Self::new(&['(', '（'], &[')', '）']);

    /// ASCII `(` `)` only.
    pub const ASCII: Self = Self::new(&['('], &[')']);

    /// Creates a bracket set from its opening and closing glyphs.
    #[must_use]
    pub const fn new(left: &'static [char], right: &'static [char]) -> Self {
        Self { left, right }
    }

    /// Returns the opening glyphs.
    #[must_use]
    pub const fn left(&self) -> &'static [char] {
        self.left
    }

    /// Returns the closing glyphs.
    #[must_use]
    pub const fn right(&self) -> &'static [char] {
        self.right
    }

    #[inline]
    fn opens(&self, character: char) -> bool {
        self.left.contains(&character)
    }

    #[inline]
    fn closes(&self, character: char) -> bool {
        self.right.contains(&character)
    }
}

const_assert!(!BracketSet::MIXED.left.is_empty() && !BracketSet::MIXED.right.is_empty());

/// Returns the content between the first opening glyph of `brackets` and the
/// first closing glyph after it, brackets excluded.
///
/// Only the first pair is considered and nesting is not tracked: the first
/// closing glyph ends the match even if another opening glyph came in
/// between.
///
/// Returns `None` if `text` is empty, has no opening glyph, or has no closing
/// glyph after the first opening one.
///
/// # Examples
///
/// ```rust
/// use groundwork::tokenize::{BracketSet, extract_content_in_brackets};
///
/// assert_eq!(extract_content_in_brackets("f(x)", &BracketSet::ASCII), Some("x"));
/// assert_eq!(extract_content_in_brackets("f（x）", &BracketSet::ASCII), None);
/// ```
pub fn extract_content_in_brackets<'a>(text: &'a str, brackets: &BracketSet) -> Option<&'a str> {
    let (start, opening) = text
        .char_indices()
        .find(|&(_, character)| brackets.opens(character))?;
    let content_start = start + opening.len_utf8();

    let content_end = text[content_start..]
        .char_indices()
        .find(|&(_, character)| brackets.closes(character))
        .map(|(offset, _)| content_start + offset)?;

    Some(&text[content_start..content_end])
}

/// Returns the content of the first bracket pair, where ASCII `(` `)` and
/// full-width `（` `）` may be mixed freely.
///
/// Shorthand for [`extract_content_in_brackets`] with [`BracketSet::MIXED`].
///
/// # Examples
///
/// ```rust
/// use groundwork::tokenize::extract_content_in_brackets_mixed;
///
/// assert_eq!(extract_content_in_brackets_mixed("a(b)c"), Some("b"));
/// assert_eq!(extract_content_in_brackets_mixed("a（b）c"), Some("b"));
/// assert_eq!(extract_content_in_brackets_mixed("no brackets"), None);
/// ```
pub fn extract_content_in_brackets_mixed(text: &str) -> Option<&str> {
    extract_content_in_brackets(text, &BracketSet::MIXED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a(b)c", Some("b"))]
    #[case("a（b）c", Some("b"))]
    #[case("（mixed)", Some("mixed"))]
    #[case("(left（right）", Some("left（right"))]
    #[case("outer(inner(x))", Some("inner(x"))]
    #[case("first(1) second(2)", Some("1"))]
    #[case("empty()", Some(""))]
    #[case(")(", None)]
    #[case("open(only", None)]
    #[case("no brackets", None)]
    #[case("", None)]
    fn test_extract_mixed(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_content_in_brackets_mixed(text), expected);
    }

    #[rstest]
    fn test_multibyte_content_is_sliced_on_char_boundaries() {
        assert_eq!(
            extract_content_in_brackets_mixed("产品（规格：大）"),
            Some("规格：大")
        );
    }

    #[rstest]
    fn test_bracket_set_accessors() {
        assert_eq!(BracketSet::MIXED.left(), &['(', '（']);
        assert_eq!(BracketSet::MIXED.right(), &[')', '）']);
    }
}
