//! Formatting utilities for terminal output

use crate::core::Word;
use colored::Colorize;
use std::fmt::Display;

/// Join a ladder into a single arrow-separated line
#[must_use]
pub fn ladder_line(words: &[Word]) -> String {
    words
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Caret line marking where `word` differs from `prev`
///
/// Aligned by character, so it lines up under the printed word.
#[must_use]
pub fn change_marker(prev: &Word, word: &Word) -> String {
    let changed = prev.diff_positions(word);
    let width = changed.last().map_or(0, |&last| last + 1);

    (0..width)
        .map(|i| if changed.contains(&i) { '^' } else { ' ' })
        .collect()
}

/// Render `word` with the characters that differ from `prev` highlighted
#[must_use]
pub fn highlight_changes(prev: Option<&Word>, word: &Word) -> String {
    let changed = prev.map(|p| p.diff_positions(word)).unwrap_or_default();

    word.chars()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if changed.contains(&i) {
                c.to_string().bright_yellow().bold().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Status message followed by the error that caused it
#[must_use]
pub fn status_line(status: &str, error: &impl Display) -> String {
    format!("{status} {error}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
