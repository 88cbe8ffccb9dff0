//! Word Ladder
//!
//! Finds the shortest chain of dictionary words between two equal-length words,
//! changing one character per step, using level-synchronous breadth-first waves.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::ladder::{SearchConfig, WordLadder};
//!
//! let words = ["cold", "cord", "card", "ward", "warm"];
//! let ladder = WordLadder::new("cold", "warm", words).unwrap();
//!
//! let result = ladder.solve(&SearchConfig::default()).unwrap();
//! assert_eq!(result.texts(), ["cold", "cord", "card", "ward", "warm"]);
//! ```

// Core domain types
pub mod core;

// Wave search engine
pub mod ladder;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
