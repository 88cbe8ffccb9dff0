//! Ladder solving command
//!
//! Builds a ladder for one source/target pair and reports the result.

use crate::core::LadderError;
use crate::ladder::{Ladder, SearchConfig, WordLadder};
use crate::wordlists::loader::{LoadError, load_from_file, load_pair};
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of solving one pair
#[derive(Debug, Clone)]
pub struct LadderReport {
    pub source: String,
    pub target: String,
    pub dictionary_size: usize,
    pub ladder: Ladder,
    pub duration: Duration,
}

/// Failure of the two-file solve mode
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Ladder(#[from] LadderError),
}

impl SolveError {
    /// Whether the failure is bad input rather than a search that found nothing
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        match self {
            Self::Load(_) => true,
            Self::Ladder(e) => e.is_input_error(),
        }
    }
}

/// Find the shortest ladder between `source` and `target` using `words`
///
/// # Errors
///
/// Returns any [`LadderError`] raised while building the dictionary or searching.
pub fn find_ladder<I, S>(
    source: &str,
    target: &str,
    words: I,
    config: &SearchConfig,
) -> Result<LadderReport, LadderError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let start = Instant::now();
    let word_ladder = WordLadder::new(source, target, words)?;
    let ladder = word_ladder.solve(config)?;
    let dictionary = word_ladder.dictionary();

    Ok(LadderReport {
        source: dictionary.word(word_ladder.source()).text().to_string(),
        target: dictionary.word(word_ladder.target()).text().to_string(),
        dictionary_size: dictionary.len(),
        ladder,
        duration: start.elapsed(),
    })
}

/// Solve the pair stored in `pair_path` against the dictionary in `dictionary_path`
///
/// The pair file holds the source word on its first line and the target on its second.
///
/// # Errors
///
/// Returns [`SolveError::Load`] if either file cannot be read, otherwise any
/// [`LadderError`] from [`find_ladder`].
pub fn solve_files(
    pair_path: &Path,
    dictionary_path: &Path,
    config: &SearchConfig,
) -> Result<LadderReport, SolveError> {
    let (source, target) = load_pair(pair_path)?;
    let words = load_from_file(dictionary_path)?;
    Ok(find_ladder(&source, &target, &words, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SAMPLE;
    use std::fs;

    #[test]
    fn find_ladder_in_sample() {
        let report = find_ladder("cold", "warm", SAMPLE, &SearchConfig::default()).unwrap();

        assert_eq!(report.ladder.texts().first(), Some(&"cold"));
        assert_eq!(report.ladder.texts().last(), Some(&"warm"));
        assert_eq!(report.ladder.steps(), 4);
        assert_eq!((report.source.as_str(), report.target.as_str()), ("cold", "warm"));
        assert!(report.dictionary_size > 0);
    }

    #[test]
    fn find_ladder_reports_errors() {
        let err = find_ladder("КОТ", "ТИП", SAMPLE, &SearchConfig::default()).unwrap_err();
        assert!(matches!(err, LadderError::NoPath { .. }));
        assert!(!err.is_input_error());

        let err = find_ladder("КОТ", "РОТА", SAMPLE, &SearchConfig::default()).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn solve_error_classification() {
        let load = SolveError::from(LoadError::MissingPair {
            path: "pair.txt".into(),
        });
        assert!(load.is_input_error());

        let no_path = SolveError::from(LadderError::NoPath {
            from: "a".into(),
            to: "b".into(),
        });
        assert!(!no_path.is_input_error());
    }

    #[test]
    fn solve_files_reads_pair_and_dictionary() {
        let dir = std::env::temp_dir().join(format!("word_ladder_solve_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let pair = dir.join("pair.txt");
        let dict = dir.join("dict.txt");
        fs::write(&pair, "КОТ\nТОН\n").unwrap();
        fs::write(&dict, "КОТ\nТОН\nНОТА\nКОТЫ\nРОТ\nРОТА\nТОТ").unwrap();

        let report = solve_files(&pair, &dict, &SearchConfig::default()).unwrap();
        assert_eq!(report.ladder.texts(), ["КОТ", "ТОТ", "ТОН"]);
        assert_eq!(report.dictionary_size, 4);

        let missing = dir.join("missing.txt");
        let err = solve_files(&missing, &dict, &SearchConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::Load(_)));

        fs::remove_dir_all(&dir).unwrap();
    }
}
