//! Hangman Marker
//!
//! Plays console hangman games written by others to check that they follow the
//! expected protocol and win about as often as a correct game should.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hangman_marker::solver::{AgentConfig, solve_game};
//! use hangman_marker::transport::GameCommand;
//! use hangman_marker::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let command = GameCommand::new("python3").arg("hangman.py");
//! let report = solve_game(&command, &dictionary, AgentConfig::default());
//! println!("{} after guessing {}", report.outcome, report.transcript.guesses());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Child process console
pub mod transport;

// Output classification
pub mod protocol;

// Solving agent
pub mod solver;

// Binomial pass/fail model
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic tracing
pub mod logging;
