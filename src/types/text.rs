//! Bounded text fields
//!
//! Record text fields (account holder names, book titles and authors) hold at
//! most [`BoundedText::MAX_CHARS`] characters. Longer input is clamped when the
//! value is constructed, so every stored field is already within bounds.

use std::fmt;
use std::ops::Deref;

/// Owned text clamped to a fixed number of characters
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedText(String);

impl BoundedText {
    /// Maximum number of characters kept by a text field
    pub const MAX_CHARS: usize = 99;

    /// Create a bounded text value, truncating anything past `MAX_CHARS`
    ///
    /// Truncation always happens on a character boundary.
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if let Some((cut, _)) = text.char_indices().nth(Self::MAX_CHARS) {
            text.truncate(cut);
        }
        BoundedText(text)
    }

    /// Create a bounded text value only if it already fits
    ///
    /// Returns `None` when `text` is longer than `MAX_CHARS`.
    pub fn exact(text: &str) -> Option<Self> {
        if text.chars().count() > Self::MAX_CHARS {
            None
        } else {
            Some(BoundedText(text.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for BoundedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BoundedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BoundedText {
    fn from(text: &str) -> Self {
        BoundedText::new(text)
    }
}

impl From<String> for BoundedText {
    fn from(text: String) -> Self {
        BoundedText::new(text)
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::short("Alice", "Alice")]
    #[case::empty("", "")]
    #[case::exactly_max(&"a".repeat(99), &"a".repeat(99))]
    #[case::one_over(&"a".repeat(100), &"a".repeat(99))]
    #[case::far_over(&"b".repeat(250), &"b".repeat(99))]
    fn test_new_clamps_to_max_chars(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(BoundedText::new(input).as_str(), expected);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let input = "é".repeat(120);
        let text = BoundedText::new(input);
        assert_eq!(text.chars().count(), BoundedText::MAX_CHARS);
        assert!(text.chars().all(|c| c == 'é'));
    }

    #[rstest]
    #[case::fits(&"x".repeat(99), true)]
    #[case::too_long(&"x".repeat(100), false)]
    fn test_exact_rejects_overlong_text(#[case] input: &str, #[case] accepted: bool) {
        assert_eq!(BoundedText::exact(input).is_some(), accepted);
    }
}
