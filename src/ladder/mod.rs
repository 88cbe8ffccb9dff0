//! Shortest word-ladder search
//!
//! [`WordLadder`] validates a source/target pair, builds the length-filtered
//! [`Dictionary`], resolves both words eagerly, and then runs the wave [`search`]
//! followed by path reconstruction.

mod dictionary;
mod path;
mod search;

pub use dictionary::{Dictionary, WordIndex};
pub use path::{reconstruct, reconstruct_by_scan};
pub use search::{MAX_ITERATIONS, MAX_WORD_DISTANCE, SearchConfig, VisitState, search};

use crate::core::{LadderError, Word};

/// A source/target pair bound to its dictionary
#[derive(Debug, Clone)]
pub struct WordLadder {
    dictionary: Dictionary,
    source: WordIndex,
    target: WordIndex,
}

/// A successful run: the ladder plus search statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    /// Words from source to target inclusive
    pub words: Vec<Word>,
    /// Dictionary entries reached before the target was found
    pub visited: usize,
}

impl Ladder {
    /// Number of substitutions (one less than the word count)
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }
}

impl WordLadder {
    /// Validate the pair and build the dictionary from `raw_words`
    ///
    /// # Errors
    ///
    /// - [`LadderError::LengthMismatch`] if the words differ in length; nothing is
    ///   scanned in that case
    /// - [`LadderError::EmptyWord`] for an empty pair
    /// - [`LadderError::WordNotFound`] if either word is missing from the filtered
    ///   dictionary (the target is checked first)
    ///
    /// # Examples
    /// ```
    /// use word_ladder::ladder::{SearchConfig, WordLadder};
    ///
    /// let words = ["КОТ", "ТОН", "НОТА", "КОТЫ", "РОТ", "РОТА", "ТОТ"];
    /// let ladder = WordLadder::new("КОТ", "ТОН", words).unwrap();
    /// assert_eq!(ladder.dictionary().len(), 4);
    ///
    /// let result = ladder.solve(&SearchConfig::default()).unwrap();
    /// assert_eq!(result.texts(), ["КОТ", "ТОТ", "ТОН"]);
    /// ```
    pub fn new<I, S>(source: &str, target: &str, raw_words: I) -> Result<Self, LadderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source_len = source.chars().count();
        let target_len = target.chars().count();

        if source_len != target_len {
            return Err(LadderError::LengthMismatch {
                source_len,
                target_len,
            });
        }
        if source_len == 0 {
            return Err(LadderError::EmptyWord);
        }

        let dictionary = Dictionary::build(raw_words, source_len);
        let target = dictionary.resolve(target)?;
        let source = dictionary.resolve(source)?;

        Ok(Self {
            dictionary,
            source,
            target,
        })
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn source(&self) -> WordIndex {
        self.source
    }

    #[must_use]
    pub const fn target(&self) -> WordIndex {
        self.target
    }

    /// Run the wave search without reconstructing the path
    ///
    /// # Errors
    ///
    /// See [`search`].
    pub fn search(&self, config: &SearchConfig) -> Result<VisitState, LadderError> {
        search(&self.dictionary, self.source, self.target, config)
    }

    /// Find the shortest ladder from source to target
    ///
    /// # Errors
    ///
    /// Propagates [`LadderError::NoPath`], [`LadderError::IterationLimitExceeded`] and,
    /// should the search state be inconsistent,
    /// [`LadderError::ReconstructionInvariantViolation`].
    pub fn solve(&self, config: &SearchConfig) -> Result<Ladder, LadderError> {
        let state = self.search(config)?;
        let words = reconstruct(&self.dictionary, &state, self.target)?;

        Ok(Ladder {
            words,
            visited: state.visited_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &[&str] = &["КОТ", "ТОН", "НОТА", "КОТЫ", "РОТ", "РОТА", "ТОТ"];
    const FIXTURE_WITH_TIP: &[&str] = &["КОТ", "ТОН", "НОТА", "КОТЫ", "РОТ", "РОТА", "ТОТ", "ТИП"];

    fn solve(from: &str, to: &str, words: &[&str]) -> Result<Ladder, LadderError> {
        WordLadder::new(from, to, words)?.solve(&SearchConfig::default())
    }

    #[test]
    fn basic_ladders() {
        let ladder = WordLadder::new("КОТ", "ТОН", FIXTURE).unwrap();
        assert_eq!(ladder.dictionary().len(), 4);
        assert_eq!(ladder.dictionary().word(ladder.source()).text(), "КОТ");
        assert_eq!(ladder.dictionary().word(ladder.target()).text(), "ТОН");

        let result = ladder.solve(&SearchConfig::default()).unwrap();
        assert_eq!(result.texts(), ["КОТ", "ТОТ", "ТОН"]);
        assert_eq!(result.steps(), 2);

        assert_eq!(solve("КОТ", "ТОТ", FIXTURE).unwrap().texts(), ["КОТ", "ТОТ"]);
    }

    #[test]
    fn same_words() {
        let result = solve("КОТ", "КОТ", FIXTURE).unwrap();
        assert_eq!(result.texts(), ["КОТ"]);
        assert_eq!(result.steps(), 0);
        assert_eq!(result.visited, 1);
    }

    #[test]
    fn words_not_in_dictionary() {
        let err = solve("ЖМОТ", "КРОТ", FIXTURE_WITH_TIP).unwrap_err();
        assert_eq!(
            err,
            LadderError::WordNotFound {
                word: "КРОТ".to_string()
            }
        );
    }

    #[test]
    fn source_missing_is_reported() {
        let err = WordLadder::new("ЖОТ", "КОТ", FIXTURE).unwrap_err();
        assert_eq!(
            err,
            LadderError::WordNotFound {
                word: "ЖОТ".to_string()
            }
        );
    }

    #[test]
    fn no_way_between_words() {
        let err = solve("КОТ", "ТИП", FIXTURE_WITH_TIP).unwrap_err();
        assert!(matches!(err, LadderError::NoPath { .. }));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = solve("КОТ", "РОТА", FIXTURE_WITH_TIP).unwrap_err();
        assert_eq!(
            err,
            LadderError::LengthMismatch {
                source_len: 3,
                target_len: 4
            }
        );
    }

    #[test]
    fn length_mismatch_is_checked_before_scanning() {
        // A word source that panics if consumed proves no dictionary scan happens
        let words = std::iter::from_fn(|| -> Option<&'static str> { panic!("dictionary scanned") });
        assert!(matches!(
            WordLadder::new("КОТ", "РОТА", words),
            Err(LadderError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn empty_words_are_rejected() {
        assert_eq!(
            WordLadder::new("", "", ["", "a"]).unwrap_err(),
            LadderError::EmptyWord
        );
    }

    #[test]
    fn classic_cold_to_warm() {
        let words = ["cold", "cord", "card", "ward", "warm", "word", "worm", "wore", "core"];
        let result = solve("cold", "warm", &words).unwrap();
        assert_eq!(result.texts(), ["cold", "cord", "card", "ward", "warm"]);
        assert!(result.visited <= words.len());
    }
}
