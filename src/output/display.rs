//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.params.length();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({})",
        result.secret.to_string().bright_yellow().bold(),
        result.params
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}  {}",
            i + 1,
            step.guess,
            feedback_pegs(step.feedback, length),
            step.feedback.to_string().bright_black()
        );

        if verbose {
            println!("  Examined:   {} codes", step.examined);
            if let Some(remaining) = step.candidates_after {
                println!("  Remaining:  {remaining} consistent codes");
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Solved in {} guesses ({} codes examined)",
            result.guess_count(),
            result.total_examined()
        )
        .green()
        .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.params
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    if let Some((secret, guesses)) = &result.hardest {
        println!("   Hardest secret:   {secret} ({guesses} guesses)");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for guess_count in result.min_guesses..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("   {guess_count:3}: {} {count:6} ({pct:5.1}%)", bar.green());
        }
    }
}
