//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_check_report, print_invalid_input, print_ladder_report,
    print_not_found,
};
