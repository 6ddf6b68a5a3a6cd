//! Hangman solving agent
//!
//! This module contains the candidate filter, the guess strategy, and the loop
//! that plays one game against an external program.

mod engine;
pub mod filter;
pub mod strategy;
pub mod transcript;

pub use engine::{Agent, AgentConfig, solve_game};
pub use filter::CandidateFilter;
pub use strategy::{BOOTSTRAP_VOWELS, Choice, GuessStrategy, LetterFrequencies};
pub use transcript::{GameReport, Transcript, TurnRecord};
