//! Command implementations

pub mod benchmark;
pub mod check;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use check::{CheckReport, run_check};
pub use solve::{LadderReport, SolveError, find_ladder, solve_files};
