//! Length-filtered, sorted dictionary with exact-match index

use crate::core::{LadderError, Word};
use rustc_hash::FxHashMap;

/// Stable 0-based handle into a [`Dictionary`]
pub type WordIndex = usize;

/// Candidate words of a single length, deduplicated and sorted
///
/// Iteration order is lexicographic, so repeated runs over the same input pick
/// the same ladder when several shortest ones exist.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    word_len: usize,
    index: FxHashMap<String, WordIndex>,
}

impl Dictionary {
    /// Build a dictionary from raw words, keeping only those of `required_length` characters
    ///
    /// Entries of any other length are expected noise in a general word list and are
    /// dropped silently.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::ladder::Dictionary;
    ///
    /// let dict = Dictionary::build(["КОТ", "ТОН", "НОТА", "КОТЫ", "РОТ", "РОТА", "ТОТ"], 3);
    /// assert_eq!(dict.len(), 4);
    /// assert_eq!(dict.word(0).text(), "КОТ");
    /// ```
    #[must_use]
    pub fn build<I, S>(raw_words: I, required_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<Word> = raw_words
            .into_iter()
            .filter(|raw| raw.as_ref().chars().count() == required_length)
            .map(|raw| Word::new(raw.as_ref()))
            .collect();

        words.sort_unstable();
        words.dedup();

        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.text().to_string(), i))
            .collect();

        tracing::debug!(
            kept = words.len(),
            word_len = required_length,
            "dictionary built"
        );

        Self {
            words,
            word_len: required_length,
            index,
        }
    }

    /// Resolve a word to its index by exact match
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::WordNotFound`] if the word is not in the filtered dictionary.
    pub fn resolve(&self, word: &str) -> Result<WordIndex, LadderError> {
        self.index
            .get(word)
            .copied()
            .ok_or_else(|| LadderError::WordNotFound {
                word: word.to_string(),
            })
    }

    /// Get the word at `index`
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn word(&self, index: WordIndex) -> &Word {
        &self.words[index]
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: WordIndex) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Character count shared by every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
