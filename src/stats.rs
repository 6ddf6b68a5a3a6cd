//! Pass/fail statistics for repeated games
//!
//! Each game is modelled as a Bernoulli trial with the reference solver's win
//! probability. A correct game should produce a win count inside the
//! three-sigma band of the resulting binomial distribution.

use crate::core::{ErrorKind, Outcome};
use crate::solver::GameReport;

/// Measured win rate of the reference solver against a correct game
pub const REFERENCE_WIN_PROBABILITY: f64 = 0.764;

/// Binomial model of the expected number of wins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedPerformance {
    pub win_probability: f64,
    pub trials: usize,
    pub mean: f64,
    pub three_sigma: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl ExpectedPerformance {
    #[must_use]
    pub fn new(trials: usize, win_probability: f64) -> Self {
        let n = trials as f64;
        let mean = n * win_probability;
        let three_sigma = 3.0 * (n * win_probability * (1.0 - win_probability)).sqrt();
        Self {
            win_probability,
            trials,
            mean,
            three_sigma,
            lower_bound: mean - three_sigma,
            upper_bound: mean + three_sigma,
        }
    }

    /// Strictly inside the three-sigma band
    #[must_use]
    pub fn contains(&self, wins: usize) -> bool {
        let wins = wins as f64;
        wins > self.lower_bound && wins < self.upper_bound
    }
}

/// Probability of exactly `successes` wins in `trials` games
///
/// Computed in log space so large trial counts do not overflow.
///
/// # Examples
/// ```
/// use hangman_marker::stats::binomial_probability;
///
/// let p = binomial_probability(1, 2, 0.5);
/// assert!((p - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn binomial_probability(successes: usize, trials: usize, probability: f64) -> f64 {
    if successes > trials {
        return 0.0;
    }
    let failures = trials - successes;
    let ln_choose: f64 = (0..successes)
        .map(|i| ((trials - i) as f64).ln() - ((i + 1) as f64).ln())
        .sum();
    let ln_success = if successes == 0 {
        0.0
    } else {
        successes as f64 * probability.ln()
    };
    let ln_failure = if failures == 0 {
        0.0
    } else {
        failures as f64 * (1.0 - probability).ln()
    };
    (ln_choose + ln_success + ln_failure).exp()
}

/// Judgement on one tested game program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Win count inside the expected band
    Pass,
    /// Ran cleanly but won too often or too rarely
    Fail,
    /// At least one game broke the protocol
    Error,
}

impl Verdict {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Error => "error",
        }
    }
}

/// Tally and verdict for one game program
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSummary {
    pub name: String,
    pub wins: usize,
    pub losses: usize,
    pub errors: Vec<ErrorKind>,
    pub verdict: Verdict,
    /// Chance a correct game gives this win count; NaN when the verdict is `Error`
    pub chance: f64,
}

/// Count outcomes and judge them against `expected`
#[must_use]
pub fn summarize(
    name: impl Into<String>,
    reports: &[GameReport],
    expected: &ExpectedPerformance,
) -> ProgramSummary {
    let mut wins = 0;
    let mut losses = 0;
    let mut errors = Vec::new();
    for report in reports {
        match report.outcome {
            Outcome::Win => wins += 1,
            Outcome::Loss => losses += 1,
            Outcome::Error(kind) => errors.push(kind),
        }
    }

    let (verdict, chance) = if !errors.is_empty() {
        (Verdict::Error, f64::NAN)
    } else {
        let chance = binomial_probability(wins, reports.len(), expected.win_probability);
        if expected.contains(wins) {
            (Verdict::Pass, chance)
        } else {
            (Verdict::Fail, chance)
        }
    };

    ProgramSummary {
        name: name.into(),
        wins,
        losses,
        errors,
        verdict,
        chance,
    }
}
