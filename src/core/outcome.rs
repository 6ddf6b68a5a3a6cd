//! Terminal game outcomes
//!
//! Every game ends in exactly one `Outcome`. Failures are values, never panics,
//! so a malformed game always yields a report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a game could not be played to a win or a loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The game process could not be launched
    SpawnError,
    /// No prompt or end-of-stream within the timeout
    ExpectError,
    /// Output before the stop point was not valid text
    BeforeDecodeError,
    /// The stop point was neither end-of-stream nor valid text
    AfterDecodeError,
    /// The game ended without announcing a win or a loss
    ReturnError,
    /// The game stopped without prompting or ending properly
    ProtocolViolation,
    /// Every bootstrap vowel was guessed without revealing a letter
    VowelExhaustion,
    /// No unrevealed letter was left to guess
    GuessExhaustion,
}

impl ErrorKind {
    /// Stable tag used in result files
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::SpawnError => "SpawnError",
            Self::ExpectError => "ExpectError",
            Self::BeforeDecodeError => "BeforeDecodeError",
            Self::AfterDecodeError => "AfterDecodeError",
            Self::ReturnError => "ReturnError",
            Self::ProtocolViolation => "ProtocolViolation",
            Self::VowelExhaustion => "VowelExhaustion",
            Self::GuessExhaustion => "GuessExhaustion",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = match self {
            Self::SpawnError => "game process could not be launched",
            Self::ExpectError => "no prompt or end of output before the timeout",
            Self::BeforeDecodeError => "game output could not be decoded as text",
            Self::AfterDecodeError => "prompt text could not be decoded",
            Self::ReturnError => "game ended without announcing a win or a loss",
            Self::ProtocolViolation => "game stopped without prompting or ending",
            Self::VowelExhaustion => "all vowels guessed and no letter revealed",
            Self::GuessExhaustion => "no unrevealed letter left to guess",
        };
        write!(f, "{}: {detail}", self.tag())
    }
}

impl std::error::Error for ErrorKind {}

/// How a game terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Error(ErrorKind),
}

impl Outcome {
    /// The error kind, if the game did not finish normally
    #[must_use]
    pub const fn error(self) -> Option<ErrorKind> {
        match self {
            Self::Error(kind) => Some(kind),
            Self::Win | Self::Loss => None,
        }
    }

    /// Short label: `Win`, `Loss`, or the error tag
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Error(kind) => kind.tag(),
        }
    }
}

impl From<ErrorKind> for Outcome {
    fn from(kind: ErrorKind) -> Self {
        Self::Error(kind)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
