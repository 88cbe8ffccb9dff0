//! Path reconstruction from a finished wave search
//!
//! Walks backward from the target. The predecessor of a word at wave `w` is the first
//! index in dictionary order that sits at wave `w - 1` and is adjacent to it.

use super::dictionary::{Dictionary, WordIndex};
use super::search::VisitState;
use crate::core::{LadderError, Word};

/// Rebuild the ladder ending at `target` by following recorded predecessors
///
/// Each step is re-checked against the wave and adjacency invariants, so a corrupt
/// state fails instead of yielding a wrong ladder.
///
/// # Errors
///
/// Returns [`LadderError::ReconstructionInvariantViolation`] if the target was never
/// reached or a predecessor is missing or inconsistent.
pub fn reconstruct(
    dictionary: &Dictionary,
    state: &VisitState,
    target: WordIndex,
) -> Result<Vec<Word>, LadderError> {
    walk_back(dictionary, state, target, |current, wave| {
        state
            .predecessor_of(current)
            .filter(|&prev| is_valid_step(dictionary, state, prev, current, wave))
    })
}

/// Rebuild the ladder by rescanning the dictionary at every step
///
/// Produces the same ladder as [`reconstruct`] at `O(|dictionary|)` cost per step.
///
/// # Errors
///
/// Same as [`reconstruct`].
pub fn reconstruct_by_scan(
    dictionary: &Dictionary,
    state: &VisitState,
    target: WordIndex,
) -> Result<Vec<Word>, LadderError> {
    walk_back(dictionary, state, target, |current, wave| {
        (0..dictionary.len()).find(|&prev| is_valid_step(dictionary, state, prev, current, wave))
    })
}

fn walk_back<F>(
    dictionary: &Dictionary,
    state: &VisitState,
    target: WordIndex,
    mut predecessor: F,
) -> Result<Vec<Word>, LadderError>
where
    F: FnMut(WordIndex, usize) -> Option<WordIndex>,
{
    let final_wave = state
        .wave_of(target)
        .ok_or_else(|| violation(dictionary, target, 0))?;

    let mut path = Vec::with_capacity(final_wave + 1);
    let mut current = target;
    path.push(dictionary.word(current).clone());

    for wave in (1..=final_wave).rev() {
        current = predecessor(current, wave).ok_or_else(|| violation(dictionary, current, wave))?;
        path.push(dictionary.word(current).clone());
    }

    path.reverse();
    Ok(path)
}

/// Whether `prev` can precede `current` (at `wave`) in a shortest ladder
fn is_valid_step(
    dictionary: &Dictionary,
    state: &VisitState,
    prev: WordIndex,
    current: WordIndex,
    wave: usize,
) -> bool {
    state.wave_of(prev) == Some(wave - 1)
        && dictionary
            .word(prev)
            .is_within(dictionary.word(current), state.max_distance())
}

fn violation(dictionary: &Dictionary, index: WordIndex, wave: usize) -> LadderError {
    LadderError::ReconstructionInvariantViolation {
        word: dictionary
            .get(index)
            .map_or_else(|| format!("#{index}"), |w| w.text().to_string()),
        wave,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::search::{SearchConfig, search};

    fn texts(path: &[Word]) -> Vec<&str> {
        path.iter().map(Word::text).collect()
    }

    fn solve(dict: &Dictionary, from: &str, to: &str) -> (VisitState, WordIndex) {
        let source = dict.resolve(from).unwrap();
        let target = dict.resolve(to).unwrap();
        let state = search(dict, source, target, &SearchConfig::default()).unwrap();
        (state, target)
    }

    #[test]
    fn reconstructs_fixture_ladders() {
        let dict = Dictionary::build(["КОТ", "ТОН", "НОТА", "КОТЫ", "РОТ", "РОТА", "ТОТ"], 3);

        let (state, target) = solve(&dict, "КОТ", "ТОН");
        assert_eq!(
            texts(&reconstruct(&dict, &state, target).unwrap()),
            ["КОТ", "ТОТ", "ТОН"]
        );

        let (state, target) = solve(&dict, "КОТ", "ТОТ");
        assert_eq!(texts(&reconstruct(&dict, &state, target).unwrap()), ["КОТ", "ТОТ"]);

        let (state, target) = solve(&dict, "КОТ", "КОТ");
        assert_eq!(texts(&reconstruct(&dict, &state, target).unwrap()), ["КОТ"]);
    }

    #[test]
    fn ties_resolve_to_first_in_dictionary_order() {
        // Both "cot" and "hat" sit between "cat" and "hot"; "cot" sorts first
        let dict = Dictionary::build(["cat", "hot", "hat", "cot"], 3);
        let (state, target) = solve(&dict, "cat", "hot");

        let path = reconstruct(&dict, &state, target).unwrap();
        assert_eq!(texts(&path), ["cat", "cot", "hot"]);
        assert_eq!(path, reconstruct_by_scan(&dict, &state, target).unwrap());
    }

    #[test]
    fn scan_matches_predecessors_on_longer_ladder() {
        let words = ["cold", "cord", "card", "ward", "warm", "word", "worm", "wore", "core"];
        let dict = Dictionary::build(words, 4);
        let (state, target) = solve(&dict, "cold", "warm");

        let path = reconstruct(&dict, &state, target).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first().unwrap().text(), "cold");
        assert_eq!(path.last().unwrap().text(), "warm");
        assert_eq!(path, reconstruct_by_scan(&dict, &state, target).unwrap());
    }

    #[test]
    fn unreached_target_is_invariant_violation() {
        let dict = Dictionary::build(["КОТ", "ТОТ", "ТИП"], 3);
        let (state, _) = solve(&dict, "КОТ", "ТОТ");
        let tip = dict.resolve("ТИП").unwrap();

        assert_eq!(
            reconstruct(&dict, &state, tip),
            Err(LadderError::ReconstructionInvariantViolation {
                word: "ТИП".to_string(),
                wave: 0
            })
        );
    }
}
