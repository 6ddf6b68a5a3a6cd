//! Hangman Marker - CLI
//!
//! Plays console hangman games automatically and judges whether they behave correctly.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use hangman_marker::{
    commands::{
        BatchConfig, discover_games, run_batch, solve_file, summarize_all, write_reports_json,
        write_summary_csv,
    },
    logging,
    output::{print_batch_summary, print_game_report},
    solver::AgentConfig,
    stats::{ExpectedPerformance, REFERENCE_WIN_PROBABILITY},
    wordlists::{Dictionary, loader::load_from_file},
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "hangman_marker",
    about = "Plays console hangman games to check that they work correctly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Longest wait for each prompt, in milliseconds
    #[arg(long, global = true, default_value = "1000")]
    timeout_ms: u64,

    /// Interpreter used to launch .py games
    #[arg(long, global = true, default_value = "python3")]
    interpreter: String,

    /// Word list file (default: embedded reference list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Tracing directives, e.g. `hangman_marker=debug` (overrides `RUST_LOG`)
    #[arg(long, global = true)]
    log: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game and show the transcript
    Solve {
        /// Game program to play
        game: PathBuf,

        /// Show candidates and letter rankings for each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play many games repeatedly and judge each one
    Batch {
        /// Game programs (default: every .py file in --dir)
        games: Vec<PathBuf>,

        /// Directory searched when no games are given
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Games played per program
        #[arg(short = 'n', long, default_value = "20")]
        trials: usize,

        /// Worker threads (default: all cores)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Expected win probability of a correct game
        #[arg(long, default_value_t = REFERENCE_WIN_PROBABILITY)]
        win_probability: f64,

        /// JSON file receiving every game report
        #[arg(long, default_value = "results.json")]
        results: PathBuf,

        /// CSV file receiving the summary table
        #[arg(long, default_value = "results.csv")]
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref());

    let dictionary = match &cli.wordlist {
        Some(path) => load_from_file(path)?,
        None => Dictionary::embedded(),
    };
    if dictionary.is_empty() {
        bail!("word list contains no usable words");
    }

    let agent_config = AgentConfig {
        timeout: Duration::from_millis(cli.timeout_ms),
        interpreter: cli.interpreter,
    };

    match cli.command {
        Commands::Solve { game, verbose } => {
            let report = solve_file(&game, &dictionary, &agent_config);
            print_game_report(&game.display().to_string(), &report, verbose);
            Ok(())
        }
        Commands::Batch {
            games,
            dir,
            trials,
            jobs,
            win_probability,
            results,
            csv,
        } => {
            if !(0.0..=1.0).contains(&win_probability) {
                bail!("win probability must be between 0 and 1, got {win_probability}");
            }
            let batch = BatchConfig {
                trials,
                jobs,
                win_probability,
            };
            let games = if games.is_empty() {
                discover_games(&dir)?
            } else {
                games
            };
            if games.is_empty() {
                bail!("no game programs found in {}", dir.display());
            }

            println!(
                "🎯 Testing {} programs, {} games each...",
                games.len(),
                batch.trials
            );
            let program_results = run_batch(&games, &dictionary, &agent_config, &batch)?;
            write_reports_json(&results, &program_results)?;

            let summaries = summarize_all(&program_results, &batch);
            write_summary_csv(&csv, &summaries)?;

            let expected = ExpectedPerformance::new(batch.trials, batch.win_probability);
            print_batch_summary(&summaries, &expected);
            Ok(())
        }
    }
}
