//! Display functions for command results

use super::formatters::{create_progress_bar, format_candidates, format_ranking};
use crate::core::Outcome;
use crate::solver::GameReport;
use crate::stats::{ExpectedPerformance, ProgramSummary, Verdict};
use colored::Colorize;

/// Print one game, turn by turn
pub fn print_game_report(game: &str, report: &GameReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Playing: {}", game.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in report.transcript.turns().iter().enumerate() {
        println!(
            "\nTurn {}: {}  guess {}",
            i + 1,
            turn.revealed,
            turn.guess.to_string().bright_yellow().bold()
        );

        if verbose {
            println!(
                "  Candidates ({}): {}",
                turn.candidates.len(),
                format_candidates(&turn.candidates, 8)
            );
            match &turn.ranking {
                Some(ranking) => println!("  Letters:    {}", format_ranking(ranking, 6)),
                None => println!("  Letters:    (vowel bootstrap)"),
            }
        }
    }

    println!();
    match report.outcome {
        Outcome::Win => println!(
            "{}",
            format!("✅ Won after {} guesses", report.transcript.len())
                .green()
                .bold()
        ),
        Outcome::Loss => println!(
            "{}",
            format!("❌ Lost after {} guesses", report.transcript.len())
                .yellow()
                .bold()
        ),
        Outcome::Error(kind) => println!("{}", format!("⚠️  {kind}").red().bold()),
    }
}

/// Print the per-program verdicts of a batch run
pub fn print_batch_summary(summaries: &[ProgramSummary], expected: &ExpectedPerformance) {
    println!("\n{}", "═".repeat(70));
    println!(" Marking Results ");
    println!("{}", "═".repeat(70));

    println!(
        "\n📐 Expected wins per {} games: {:.2} (pass band {:.2} – {:.2})",
        expected.trials, expected.mean, expected.lower_bound, expected.upper_bound
    );

    for summary in summaries {
        let played = summary.wins + summary.losses + summary.errors.len();
        let bar = create_progress_bar(summary.wins as f64, played as f64, 30);
        let verdict = match summary.verdict {
            Verdict::Pass => summary.verdict.label().green().bold(),
            Verdict::Fail => summary.verdict.label().yellow().bold(),
            Verdict::Error => summary.verdict.label().red().bold(),
        };

        println!("\n{} {}", "▶".cyan(), summary.name.bold());
        println!(
            "  Wins:   {} {}/{}",
            bar.green(),
            summary.wins,
            played
        );
        println!("  Losses: {}", summary.losses);
        if !summary.errors.is_empty() {
            let tags: Vec<&str> = summary.errors.iter().map(|e| e.tag()).collect();
            println!("  Errors: {}", tags.join(", ").red());
        }
        if summary.chance.is_nan() {
            println!("  Result: {verdict}");
        } else {
            println!(
                "  Result: {verdict} (probability of this result by chance {:.4})",
                summary.chance
            );
        }
    }

    let passed = summaries
        .iter()
        .filter(|s| s.verdict == Verdict::Pass)
        .count();
    println!(
        "\n{} {passed}/{} programs passed",
        "Summary:".bright_cyan().bold(),
        summaries.len()
    );
}
