//! Display functions for command results

use super::formatters::{BAR_WIDTH, create_progress_bar, entropy_bar, guesses_noun, percent};
use crate::commands::{OpeningStats, RankedOpening, SolveResult};
use crate::hints::CacheStatus;
use crate::solver::Outcome;
use crate::wordlists::WordLists;
use colored::Colorize;

/// One-line summary of the loaded lists and where the matrix came from
pub fn print_session_header(lists: &WordLists, status: Option<CacheStatus>) {
    let source = match status {
        Some(CacheStatus::Hit) => "cached".green(),
        Some(CacheStatus::Miss) => "built".yellow(),
        Some(CacheStatus::Rebuilt) => "rebuilt".yellow(),
        None => "built, not cached".bright_black(),
    };
    println!(
        "Word list {}: {} guesses, {} solutions (hint matrix {source})",
        lists.name.bright_cyan().bold(),
        lists.guesses.len(),
        lists.solutions.len()
    );
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.report.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            turn.guess.text().to_uppercase(),
            turn.feedback.to_emoji()
        );

        if verbose {
            match turn.candidates_after {
                Some(after) => println!("  Candidates: {} → {after}", turn.candidates_before),
                None => println!("  Candidates: {}", turn.candidates_before),
            }
            if let Some(entropy) = turn.entropy {
                println!("  Entropy:    {entropy:.3} bits");
            }
            if let Some(after) = turn.candidates_after.filter(|&n| n > 0) {
                let ratio = turn.candidates_before as f64 / after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    let played = result.report.rounds();
    match result.report.outcome {
        Outcome::Solved(rounds) => println!(
            "{}",
            format!("Solved in {rounds} {}!", guesses_noun(rounds))
                .green()
                .bold()
        ),
        Outcome::Exhausted => println!(
            "{}",
            format!("Failed to solve in {played} {}", guesses_noun(played))
                .red()
                .bold()
        ),
    }
}

/// Print the opening table
pub fn print_ranking(table: &[RankedOpening], solutions: usize) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(
        " {} {} ",
        "BEST OPENINGS".bright_cyan().bold(),
        format!("against {solutions} possible answers").bright_black()
    );
    println!("{}", "═".repeat(70).cyan());

    let best = table.first().map_or(0.0, |row| row.ranked.entropy);
    for (i, row) in table.iter().enumerate() {
        println!(
            " {:>3}. {}  [{}] {}  ~{:.1} left, worst {}",
            i + 1,
            row.ranked.word.text().to_uppercase().bright_white().bold(),
            entropy_bar(row.ranked.entropy, best, BAR_WIDTH).green(),
            format!("{:.2} bits", row.ranked.entropy).bright_yellow(),
            row.metrics.expected_remaining,
            row.metrics.max_partition
        );
    }
}

/// Print the statistics of every simulated opening
pub fn print_stats(results: &[OpeningStats]) {
    for stats in results {
        println!("\n{}", "═".repeat(70).cyan());
        println!(
            " Using guess: {} ({:.2} bits)",
            stats.opening.text().to_uppercase().bright_yellow().bold(),
            stats.entropy
        );
        println!("{}", "═".repeat(70).cyan());

        println!(
            "  Total words solved: {} of {} {}",
            stats.solved,
            stats.played,
            format!("({:.1}%)", percent(stats.solved, stats.played)).green()
        );
        if stats.exhausted > 0 {
            println!(
                "  Out of guesses:     {}",
                stats.exhausted.to_string().red().bold()
            );
        }
        println!(
            "  Average guesses:    {}",
            format!("{:.3}", stats.average()).bright_yellow().bold()
        );
        println!("  Time taken:         {:.2}s", stats.duration.as_secs_f64());

        let most = stats.histogram.values().copied().max().unwrap_or(0);
        for (rounds, &count) in &stats.histogram {
            println!(
                "  {rounds} {:<8} {} {count:4} ({:5.1}%)",
                guesses_noun(*rounds),
                create_progress_bar(count as f64, most as f64, BAR_WIDTH).green(),
                percent(count, stats.solved)
            );
        }
    }
}
