//! Batch marking across many game programs
//!
//! Every program is played `trials` times. Programs run in parallel on a rayon
//! pool; the trials of one program run one after another, each with its own
//! process. The dictionary is shared read-only by all of them.

use crate::solver::{Agent, AgentConfig, GameReport};
use crate::stats::{ExpectedPerformance, ProgramSummary, REFERENCE_WIN_PROBABILITY, summarize};
use crate::transport::GameCommand;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Header of the summary CSV
pub const CSV_HEADER: &str = "file name;No. wins;No. losses;List of errors;Result;Probability that this result occurred by chance not error";

/// Batch settings
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Games played per program
    pub trials: usize,
    /// Worker threads; `None` uses every core
    pub jobs: Option<usize>,
    /// Win probability of the reference solver against a correct game
    pub win_probability: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            trials: 20,
            jobs: None,
            win_probability: REFERENCE_WIN_PROBABILITY,
        }
    }
}

/// All reports for one program
#[derive(Debug, Clone, Serialize)]
pub struct ProgramResults {
    pub game: PathBuf,
    pub reports: Vec<GameReport>,
}

/// Python game files directly inside `dir`, sorted by name
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn discover_games(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut games = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))? {
        let path = entry
            .with_context(|| format!("read entry in {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "py") {
            games.push(path);
        }
    }
    games.sort();
    Ok(games)
}

/// Play every game `trials` times
///
/// # Errors
///
/// Returns an error if the worker pool cannot be built.
#[instrument(skip_all, fields(games = games.len(), trials = batch.trials))]
pub fn run_batch(
    games: &[PathBuf],
    dictionary: &Dictionary,
    agent_config: &AgentConfig,
    batch: &BatchConfig,
) -> Result<Vec<ProgramResults>> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = batch.jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build().context("build worker pool")?;

    let pb = ProgressBar::new(games.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let results: Vec<ProgramResults> = pool.install(|| {
        games
            .par_iter()
            .map(|game| {
                let command = GameCommand::for_game_file(game, &agent_config.interpreter);
                let agent = Agent::new(dictionary, agent_config.clone());
                let reports: Vec<GameReport> =
                    (0..batch.trials).map(|_| agent.play(&command)).collect();

                pb.set_message(format!("{} tested", game.display()));
                pb.inc(1);
                info!(game = %game.display(), "program tested");
                ProgramResults {
                    game: game.clone(),
                    reports,
                }
            })
            .collect()
    });

    pb.finish_with_message("Complete!");
    Ok(results)
}

/// Summarize every program against the binomial model
#[must_use]
pub fn summarize_all(results: &[ProgramResults], batch: &BatchConfig) -> Vec<ProgramSummary> {
    let expected = ExpectedPerformance::new(batch.trials, batch.win_probability);
    results
        .iter()
        .map(|r| summarize(r.game.display().to_string(), &r.reports, &expected))
        .collect()
}

/// Write every report, transcripts included, as JSON
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_reports_json(path: &Path, results: &[ProgramResults]) -> Result<()> {
    let json = serde_json::to_string_pretty(results).context("serialize reports")?;
    fs::write(path, json).with_context(|| format!("write reports {}", path.display()))
}

/// Render the summaries as a `;`-delimited table
#[must_use]
pub fn summary_csv(summaries: &[ProgramSummary]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for s in summaries {
        let errors: Vec<&str> = s.errors.iter().map(|e| e.tag()).collect();
        let _ = writeln!(
            out,
            "{};{};{};{};{};{}",
            csv_field(&s.name),
            s.wins,
            s.losses,
            csv_field(&format!("[{}]", errors.join(", "))),
            s.verdict.label(),
            s.chance
        );
    }
    out
}

/// Write the summary table
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_summary_csv(path: &Path, summaries: &[ProgramSummary]) -> Result<()> {
    fs::write(path, summary_csv(summaries))
        .with_context(|| format!("write summary {}", path.display()))
}

fn csv_field(value: &str) -> String {
    if value.contains([';', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, Outcome};
    use crate::solver::Transcript;
    use crate::stats::Verdict;

    fn summary(name: &str, errors: Vec<ErrorKind>, verdict: Verdict, chance: f64) -> ProgramSummary {
        ProgramSummary {
            name: name.to_string(),
            wins: 15,
            losses: 5,
            errors,
            verdict,
            chance,
        }
    }

    #[test]
    fn discover_finds_only_python_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.py"), "").unwrap();
        fs::write(dir.path().join("a.py"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("pkg.py")).unwrap();

        let games = discover_games(dir.path()).unwrap();
        let names: Vec<_> = games
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.py", "b.py"]);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = summary_csv(&[
            summary("alice.py", vec![], Verdict::Pass, 0.2),
            summary(
                "bob.py",
                vec![ErrorKind::ExpectError, ErrorKind::VowelExhaustion],
                Verdict::Error,
                f64::NAN,
            ),
        ]);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "alice.py;15;5;[];pass;0.2");
        assert_eq!(lines[2], "bob.py;15;5;[ExpectError, VowelExhaustion];error;NaN");
    }

    #[test]
    fn csv_quotes_awkward_names() {
        assert_eq!(csv_field("a;b.py"), "\"a;b.py\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("plain.py"), "plain.py");
    }

    #[test]
    fn reports_json_round_trips_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let results = vec![ProgramResults {
            game: PathBuf::from("alice.py"),
            reports: vec![GameReport {
                outcome: Outcome::Error(ErrorKind::SpawnError),
                transcript: Transcript::default(),
            }],
        }];

        write_reports_json(&path, &results).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["game"], "alice.py");
        assert_eq!(value[0]["reports"][0]["outcome"]["Error"], "SpawnError");
    }

    #[test]
    fn summarize_all_uses_trial_count() {
        let results = vec![ProgramResults {
            game: PathBuf::from("dave.py"),
            reports: vec![
                GameReport {
                    outcome: Outcome::Win,
                    transcript: Transcript::default(),
                };
                4
            ],
        }];
        let batch = BatchConfig {
            trials: 4,
            ..BatchConfig::default()
        };

        let summaries = summarize_all(&results, &batch);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "dave.py");
        assert_eq!(summaries[0].wins, 4);
    }
}
