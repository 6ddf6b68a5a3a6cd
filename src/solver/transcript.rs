//! Per-game diagnostic transcript
//!
//! Append-only; the solver never reads it back.

use crate::core::Outcome;
use serde::{Deserialize, Serialize};

/// One live turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Letter sent to the game
    pub guess: char,
    /// Pattern the guess was chosen from
    pub revealed: String,
    /// Candidates at the time of the guess
    pub candidates: Vec<String>,
    /// Letter ranking, present only in the frequency phase
    pub ranking: Option<Vec<(char, usize)>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<TurnRecord>,
}

impl Transcript {
    pub fn push(&mut self, record: TurnRecord) {
        self.turns.push(record);
    }

    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Guessed letters in order
    #[must_use]
    pub fn guesses(&self) -> String {
        self.turns.iter().map(|t| t.guess).collect()
    }
}

/// What the agent hands back for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub outcome: Outcome,
    pub transcript: Transcript,
}
