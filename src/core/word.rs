//! Dictionary word representation
//!
//! A Word stores its text together with the decoded characters so that length and
//! distance are measured in characters, not UTF-8 bytes.

use std::fmt;

/// An immutable dictionary word
///
/// Ordering and equality follow the underlying text, so a sorted `Vec<Word>` is in
/// lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    chars: Box<[char]>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is taken verbatim: no trimming or case folding.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("КОТ");
    /// assert_eq!(word.text(), "КОТ");
    /// assert_eq!(word.len(), 3);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the decoded characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Hamming distance to another word
    ///
    /// Returns `None` when the lengths differ; such words are never compared.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let cold = Word::new("cold");
    /// assert_eq!(cold.distance(&Word::new("cord")), Some(1));
    /// assert_eq!(cold.distance(&Word::new("warm")), Some(4));
    /// assert_eq!(cold.distance(&Word::new("cot")), None);
    /// ```
    #[must_use]
    pub fn distance(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        Some(
            self.chars
                .iter()
                .zip(other.chars.iter())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// Check whether `other` is within `max_distance` substitutions
    ///
    /// Stops counting as soon as the bound is exceeded.
    #[must_use]
    pub fn is_within(&self, other: &Self, max_distance: usize) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut dist = 0;
        for (a, b) in self.chars.iter().zip(other.chars.iter()) {
            if a != b {
                dist += 1;
                if dist > max_distance {
                    return false;
                }
            }
        }
        true
    }

    /// Positions at which the two words differ
    ///
    /// Empty when lengths differ or the words are equal.
    #[must_use]
    pub fn diff_positions(&self, other: &Self) -> Vec<usize> {
        if self.len() != other.len() {
            return Vec::new();
        }

        self.chars
            .iter()
            .zip(other.chars.iter())
            .enumerate()
            .filter_map(|(i, (a, b))| (a != b).then_some(i))
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
