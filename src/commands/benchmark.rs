//! Benchmark command
//!
//! Solves random source/target pairs drawn from one dictionary and aggregates the results.

use crate::core::{LadderError, Word};
use crate::ladder::{Dictionary, SearchConfig, reconstruct, search};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Benchmark parameters
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Character count of the words to sample
    pub word_len: usize,
    /// Number of random pairs to solve
    pub pairs: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(word_len: usize, pairs: usize) -> Self {
        Self {
            word_len,
            pairs,
            seed: 42,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub dictionary_size: usize,
    pub total_pairs: usize,
    pub solved: usize,
    pub no_path: usize,
    pub limit_exceeded: usize,
    /// Ladder length in steps → number of pairs
    pub distribution: HashMap<usize, usize>,
    pub average_steps: f64,
    pub longest: Option<Vec<Word>>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Solve `config.pairs` random pairs drawn from `words`
///
/// The dictionary is built once; each pair runs a fresh search. Pairs are drawn
/// with replacement from a seeded generator, so runs are reproducible.
///
/// # Errors
///
/// Returns [`LadderError::ReconstructionInvariantViolation`] if a successful search
/// cannot be turned into a ladder.
pub fn run_benchmark<S: AsRef<str>>(
    words: &[S],
    config: &BenchmarkConfig,
    search_config: &SearchConfig,
) -> Result<BenchmarkResult, LadderError> {
    let dictionary = Dictionary::build(words, config.word_len);
    let total_pairs = if dictionary.is_empty() { 0 } else { config.pairs };

    tracing::info!(
        dictionary = dictionary.len(),
        pairs = total_pairs,
        seed = config.seed,
        "benchmark started"
    );

    let pb = progress_bar(total_pairs, config.show_progress);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut solved = 0;
    let mut no_path = 0;
    let mut limit_exceeded = 0;
    let mut total_steps = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut longest: Option<Vec<Word>> = None;

    let start = Instant::now();

    for _ in 0..total_pairs {
        let source = rng.random_range(0..dictionary.len());
        let target = rng.random_range(0..dictionary.len());

        match search(&dictionary, source, target, search_config) {
            Ok(state) => {
                let ladder = reconstruct(&dictionary, &state, target)?;
                let steps = ladder.len() - 1;

                solved += 1;
                total_steps += steps;
                *distribution.entry(steps).or_insert(0) += 1;

                if longest.as_ref().is_none_or(|l| ladder.len() > l.len()) {
                    longest = Some(ladder);
                }
            }
            Err(LadderError::NoPath { .. }) => no_path += 1,
            Err(LadderError::IterationLimitExceeded { .. }) => limit_exceeded += 1,
            Err(e) => return Err(e),
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    let average_steps = if solved == 0 {
        0.0
    } else {
        total_steps as f64 / solved as f64
    };
    let pairs_per_second = if duration.is_zero() {
        0.0
    } else {
        total_pairs as f64 / duration.as_secs_f64()
    };

    Ok(BenchmarkResult {
        dictionary_size: dictionary.len(),
        total_pairs,
        solved,
        no_path,
        limit_exceeded,
        distribution,
        average_steps,
        longest,
        duration,
        pairs_per_second,
    })
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}
