//! Display functions for command results

use super::formatters::{
    change_marker, create_progress_bar, highlight_changes, ladder_line, status_line,
};
use crate::commands::{BenchmarkResult, CheckReport, LadderReport};
use colored::Colorize;
use std::fmt::Display;

/// Print a found ladder, one word per line
///
/// Verbose mode adds the search summary on top and a caret under each substitution.
pub fn print_ladder_report(report: &LadderReport, verbose: bool) {
    if verbose {
        println!("\n{}", "─".repeat(60).cyan());
        println!(
            "Ladder: {} → {}",
            report.source.bright_yellow().bold(),
            report.target.bright_yellow().bold()
        );
        println!("{}", "─".repeat(60).cyan());
        println!("  Dictionary:  {} words", report.dictionary_size);
        println!("  Visited:     {} words", report.ladder.visited);
        println!("  Steps:       {}", report.ladder.steps());
        println!("  Time taken:  {:.3}ms\n", report.duration.as_secs_f64() * 1000.0);
    }

    let mut prev = None;
    for word in &report.ladder.words {
        println!("{}", highlight_changes(prev, word));
        if let (true, Some(p)) = (verbose, prev) {
            println!("{}", change_marker(p, word).bright_black());
        }
        prev = Some(word);
    }
}

/// Print the message for input that could not be searched
///
/// Goes to stdout like every other result; stderr carries only log output.
pub fn print_invalid_input(error: &impl Display) {
    let status = "Invalid input data.".red().bold().to_string();
    println!("{}", status_line(&status, error));
}

/// Print the message for a search that found no ladder
pub fn print_not_found(error: &impl Display) {
    let status = "Result not found.".yellow().bold().to_string();
    println!("{}", status_line(&status, error));
}

/// Print the self-check report
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SELF-CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for outcome in &report.outcomes {
        let mark = if outcome.passed {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        println!("  {mark} {:<28} {}", outcome.name, outcome.actual.bright_black());
    }

    println!();
    if report.all_passed() {
        println!(
            "{}",
            format!("✅ All {} checks passed", report.outcomes.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ {} of {} checks failed", report.failed(), report.outcomes.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Dictionary:       {} words", result.dictionary_size);
    println!("   Pairs tested:     {}", result.total_pairs);
    println!("   Solved:           {}", format!("{}", result.solved).green());
    println!("   No path:          {}", format!("{}", result.no_path).yellow());
    if result.limit_exceeded > 0 {
        println!(
            "   Limit exceeded:   {}",
            format!("{}", result.limit_exceeded).red()
        );
    }
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if let Some(longest) = &result.longest {
        println!("\n🪜 {}", "Longest ladder:".bright_cyan().bold());
        println!("   {}", ladder_line(longest));
    }

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut steps: Vec<_> = result.distribution.keys().copied().collect();
    steps.sort_unstable();
    for step_count in steps {
        let count = result.distribution[&step_count];
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {step_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
