//! Word list loading utilities
//!
//! Reads dictionaries and source/target pair files from disk. Lines are trimmed and
//! blank lines skipped. Dictionary lines that are not valid UTF-8 are dropped one by
//! one; the pair file must decode as a whole.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors while reading input files
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("can't read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("can't read file {}: expected source and target words on the first two lines", path.display())]
    MissingPair { path: PathBuf },
}

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = words_from_bytes(&bytes);

    tracing::debug!(path = %path.display(), words = words.len(), "dictionary loaded");
    Ok(words)
}

/// Split in-memory text into words, one per line
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_text;
///
/// let words = words_from_text("cold\r\n  warm \n\ncord\n");
/// assert_eq!(words, ["cold", "warm", "cord"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    words_from_bytes(text.as_bytes())
}

/// Split raw bytes into words, one per line, skipping lines that are not UTF-8
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_bytes;
///
/// let words = words_from_bytes(b"cold\n\xea\xee\xf2\nwarm\n");
/// assert_eq!(words, ["cold", "warm"]);
/// ```
#[must_use]
pub fn words_from_bytes(bytes: &[u8]) -> Vec<String> {
    let mut skipped = 0usize;
    let words = bytes
        .split(|&b| b == b'\n')
        .filter_map(|line| {
            let decoded = std::str::from_utf8(line);
            if decoded.is_err() {
                skipped += 1;
            }
            decoded.ok()
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if skipped > 0 {
        tracing::warn!(skipped, "dropped dictionary lines that are not valid UTF-8");
    }
    words
}

/// Convert an embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Read the source and target words from the first two lines of a file
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::MissingPair`] if it has fewer than two lines.
pub fn load_pair<P: AsRef<Path>>(path: P) -> Result<(String, String), LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    pair_from_text(&content).ok_or_else(|| LoadError::MissingPair {
        path: path.to_path_buf(),
    })
}

/// Take the first two lines of `text` as source and target
///
/// Only surrounding whitespace is trimmed; a blank line still counts as a word.
#[must_use]
pub fn pair_from_text(text: &str) -> Option<(String, String)> {
    let mut lines = text.lines().map(str::trim);
    let source = lines.next()?;
    let target = lines.next()?;
    Some((source.to_string(), target.to_string()))
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
