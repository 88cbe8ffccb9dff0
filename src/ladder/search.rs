//! Level-synchronous breadth-first search over the implicit word graph
//!
//! Nodes are dictionary indices; two nodes are adjacent when their Hamming distance
//! is within `max_distance`. All edges weigh the same, so expanding one whole wave
//! at a time yields shortest ladders without a priority queue. Adjacency is computed
//! on demand; no graph is materialized.

use super::dictionary::{Dictionary, WordIndex};
use crate::core::LadderError;
use rayon::prelude::*;

/// Maximum number of substitutions between neighbouring words
pub const MAX_WORD_DISTANCE: usize = 1;

/// Default cap on the number of waves examined
pub const MAX_ITERATIONS: usize = 10_000;

/// Search parameters injected at the search entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_distance: usize,
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_distance: MAX_WORD_DISTANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Per-search record of the wave at which each index was first reached
///
/// Parallel to the dictionary. A recorded wave is never overwritten.
#[derive(Debug, Clone)]
pub struct VisitState {
    waves: Vec<Option<usize>>,
    predecessors: Vec<Option<WordIndex>>,
    max_distance: usize,
}

impl VisitState {
    fn new(len: usize, max_distance: usize) -> Self {
        Self {
            waves: vec![None; len],
            predecessors: vec![None; len],
            max_distance,
        }
    }

    /// Record `index` at `wave` unless it was already reached
    ///
    /// Returns `true` if this call marked it.
    fn mark(&mut self, index: WordIndex, wave: usize, predecessor: Option<WordIndex>) -> bool {
        if self.waves[index].is_some() {
            return false;
        }
        self.waves[index] = Some(wave);
        self.predecessors[index] = predecessor;
        true
    }

    /// Wave number of `index`, or `None` if it was never reached
    #[inline]
    #[must_use]
    pub fn wave_of(&self, index: WordIndex) -> Option<usize> {
        self.waves.get(index).copied().flatten()
    }

    /// Index that discovered `index`; `None` for the source and for unvisited words
    #[inline]
    #[must_use]
    pub fn predecessor_of(&self, index: WordIndex) -> Option<WordIndex> {
        self.predecessors.get(index).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn is_visited(&self, index: WordIndex) -> bool {
        self.wave_of(index).is_some()
    }

    /// Number of indices reached by the search
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.waves.iter().filter(|w| w.is_some()).count()
    }

    /// Deepest wave reached
    #[must_use]
    pub fn depth(&self) -> usize {
        self.waves.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Indices first reached at `wave`, in dictionary order
    #[must_use]
    pub fn wave(&self, wave: usize) -> Vec<WordIndex> {
        self.waves
            .iter()
            .enumerate()
            .filter_map(|(i, w)| (*w == Some(wave)).then_some(i))
            .collect()
    }

    /// Distance threshold the search ran with
    #[inline]
    #[must_use]
    pub const fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Size of the dictionary this state was built for
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.waves.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}

/// Run the wave search from `source` until `target` is reached
///
/// # Errors
///
/// - [`LadderError::NoPath`] if a wave comes up empty before the target is reached
/// - [`LadderError::IterationLimitExceeded`] if `config.max_iterations` waves were
///   examined without an answer
/// - [`LadderError::IndexOutOfRange`] if `source` or `target` is not an index into
///   `dictionary`
///
/// # Examples
/// ```
/// use word_ladder::ladder::{Dictionary, SearchConfig, search};
///
/// let dict = Dictionary::build(["КОТ", "ТОН", "РОТ", "ТОТ"], 3);
/// let kot = dict.resolve("КОТ").unwrap();
/// let ton = dict.resolve("ТОН").unwrap();
///
/// let state = search(&dict, kot, ton, &SearchConfig::default()).unwrap();
/// assert_eq!(state.wave_of(ton), Some(2));
/// ```
pub fn search(
    dictionary: &Dictionary,
    source: WordIndex,
    target: WordIndex,
    config: &SearchConfig,
) -> Result<VisitState, LadderError> {
    for index in [source, target] {
        if index >= dictionary.len() {
            return Err(LadderError::IndexOutOfRange {
                index,
                len: dictionary.len(),
            });
        }
    }

    let mut state = VisitState::new(dictionary.len(), config.max_distance);
    state.mark(source, 0, None);

    if source == target {
        tracing::debug!(word = %dictionary.word(source), "source equals target");
        return Ok(state);
    }

    let mut frontier = vec![source];

    for wave in 0..config.max_iterations {
        if frontier.contains(&target) {
            tracing::info!(
                waves = wave,
                visited = state.visited_count(),
                "target reached"
            );
            return Ok(state);
        }

        tracing::debug!(wave, frontier = frontier.len(), "expanding wave");

        let discoveries = expand(dictionary, &state, &frontier);

        // Frontier is sorted, so the first discoverer of an index is also the
        // smallest valid predecessor.
        let next_wave = wave + 1;
        let mut next_frontier = Vec::new();
        for (index, predecessor) in discoveries {
            if state.mark(index, next_wave, Some(predecessor)) {
                next_frontier.push(index);
            }
        }

        tracing::trace!(
            wave = next_wave,
            discovered = next_frontier.len(),
            "wave merged"
        );

        if next_frontier.is_empty() {
            tracing::info!(
                waves = wave,
                visited = state.visited_count(),
                "frontier exhausted"
            );
            return Err(LadderError::NoPath {
                from: dictionary.word(source).text().to_string(),
                to: dictionary.word(target).text().to_string(),
            });
        }

        next_frontier.sort_unstable();
        frontier = next_frontier;
    }

    tracing::warn!(limit = config.max_iterations, "iteration limit reached");
    Err(LadderError::IterationLimitExceeded {
        limit: config.max_iterations,
    })
}

/// Scan the dictionary for unvisited neighbours of every frontier word
///
/// Returns `(neighbour, discovering frontier word)` pairs in frontier order. The same
/// neighbour may appear several times; marking resolves duplicates.
fn expand(
    dictionary: &Dictionary,
    state: &VisitState,
    frontier: &[WordIndex],
) -> Vec<(WordIndex, WordIndex)> {
    let max_distance = state.max_distance;

    frontier
        .par_iter()
        .flat_map_iter(|&parent| {
            let word = dictionary.word(parent);
            dictionary
                .words()
                .iter()
                .enumerate()
                .filter(move |&(i, candidate)| {
                    !state.is_visited(i) && word.is_within(candidate, max_distance)
                })
                .map(move |(i, _)| (i, parent))
        })
        .collect()
}
