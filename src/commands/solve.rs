//! Single game command
//!
//! Plays one game file once and returns its report.

use crate::solver::{Agent, AgentConfig, GameReport};
use crate::transport::GameCommand;
use crate::wordlists::Dictionary;
use std::path::Path;

/// Play `game` once
#[must_use]
pub fn solve_file(game: &Path, dictionary: &Dictionary, config: &AgentConfig) -> GameReport {
    let command = GameCommand::for_game_file(game, &config.interpreter);
    Agent::new(dictionary, config.clone()).play(&command)
}
