//! Word Ladder - CLI
//!
//! Shortest word-ladder search between two words of a dictionary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use word_ladder::{
    commands::{BenchmarkConfig, find_ladder, run_benchmark, run_check, solve_files},
    ladder::{MAX_ITERATIONS, SearchConfig},
    logging::init_tracing,
    output::{
        print_benchmark_result, print_check_report, print_invalid_input, print_ladder_report,
        print_not_found,
    },
    wordlists::{
        SAMPLE,
        loader::{LoadError, load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find the shortest word ladder between two words of a dictionary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum number of breadth-first waves before giving up
    #[arg(long, global = true, default_value_t = MAX_ITERATIONS)]
    max_iterations: usize,

    /// Show search details and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the pair in PAIR_FILE (source and target on the first two lines)
    Solve {
        /// File with the source word on line 1 and the target word on line 2
        pair_file: PathBuf,

        /// Dictionary file, one word per line
        dictionary: PathBuf,
    },

    /// Find a ladder between two words given on the command line
    Find {
        source: String,
        target: String,

        /// Dictionary file (default: built-in sample)
        #[arg(short = 'w', long)]
        wordlist: Option<PathBuf>,
    },

    /// Run the built-in self-check scenarios
    Check,

    /// Solve random pairs from a dictionary and report statistics
    Benchmark {
        /// Dictionary file (default: built-in sample)
        #[arg(short = 'w', long)]
        wordlist: Option<PathBuf>,

        /// Length of the words to sample
        #[arg(short = 'l', long, default_value = "3")]
        length: usize,

        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for pair selection
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SearchConfig::default().with_max_iterations(cli.max_iterations);

    match cli.command {
        Commands::Solve {
            pair_file,
            dictionary,
        } => Ok(run_solve_command(&pair_file, &dictionary, &config, cli.verbose)),
        Commands::Find {
            source,
            target,
            wordlist,
        } => Ok(run_find_command(
            &source,
            &target,
            wordlist.as_deref(),
            &config,
            cli.verbose,
        )),
        Commands::Check => Ok(run_check_command(&config)),
        Commands::Benchmark {
            wordlist,
            length,
            count,
            seed,
        } => {
            let bench = BenchmarkConfig {
                seed,
                ..BenchmarkConfig::new(length, count)
            };
            run_benchmark_command(wordlist.as_deref(), &bench, &config)
        }
    }
}

/// Load the dictionary from `path`, or fall back to the embedded sample
fn load_wordlist(path: Option<&Path>) -> Result<Vec<String>, LoadError> {
    path.map_or_else(|| Ok(words_from_slice(SAMPLE)), load_from_file)
}

fn run_solve_command(
    pair_file: &Path,
    dictionary: &Path,
    config: &SearchConfig,
    verbose: bool,
) -> ExitCode {
    match solve_files(pair_file, dictionary, config) {
        Ok(report) => {
            print_ladder_report(&report, verbose);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_input_error() => {
            print_invalid_input(&e);
            ExitCode::FAILURE
        }
        Err(e) => {
            print_not_found(&e);
            ExitCode::SUCCESS
        }
    }
}

fn run_find_command(
    source: &str,
    target: &str,
    wordlist: Option<&Path>,
    config: &SearchConfig,
    verbose: bool,
) -> ExitCode {
    let words = match load_wordlist(wordlist) {
        Ok(words) => words,
        Err(e) => {
            print_invalid_input(&e);
            return ExitCode::FAILURE;
        }
    };

    match find_ladder(source, target, &words, config) {
        Ok(report) => {
            print_ladder_report(&report, verbose);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_input_error() => {
            print_invalid_input(&e);
            ExitCode::FAILURE
        }
        Err(e) => {
            print_not_found(&e);
            ExitCode::SUCCESS
        }
    }
}

fn run_check_command(config: &SearchConfig) -> ExitCode {
    let report = run_check(config);
    print_check_report(&report);

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_benchmark_command(
    wordlist: Option<&Path>,
    bench: &BenchmarkConfig,
    config: &SearchConfig,
) -> Result<ExitCode> {
    let words = load_wordlist(wordlist)?;

    println!(
        "Running benchmark on {} random pairs of {}-letter words...",
        bench.pairs, bench.word_len
    );

    let result = run_benchmark(&words, bench, config)?;
    print_benchmark_result(&result);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbour_distance_is_not_a_flag() {
        let args = ["word_ladder", "find", "cold", "warm", "--max-distance", "4"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn iteration_cap_is_a_global_flag() {
        let cli = Cli::try_parse_from(["word_ladder", "check", "--max-iterations", "7"]).unwrap();
        assert_eq!(cli.max_iterations, 7);
        assert!(matches!(cli.command, Commands::Check));

        let cli = Cli::try_parse_from(["word_ladder", "find", "cold", "warm"]).unwrap();
        assert_eq!(cli.max_iterations, MAX_ITERATIONS);
    }
}
