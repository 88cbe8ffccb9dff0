//! Word lists for ladder searches
//!
//! Provides a small embedded dictionary and loaders for user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE.len(), SAMPLE_COUNT);
    }

    #[test]
    fn sample_has_no_blank_entries() {
        for &word in SAMPLE {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim(), "Word '{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn sample_contains_fixture_words() {
        for word in ["КОТ", "ТОН", "РОТ", "ТОТ", "ТИП", "cold", "warm"] {
            assert!(SAMPLE.contains(&word), "missing {word}");
        }
    }
}
