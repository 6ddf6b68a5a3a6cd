//! Classification of captured console output
//!
//! Both halves of a `RawEvent` are decoded and normalized (lowercase, trimmed,
//! whitespace runs collapsed to one space) before any matching.

use crate::core::ErrorKind;
use crate::transport::{RawEvent, StopPoint};

const WIN_TEXT: &str = "congratulations you win";
const LOSS_TEXT: &str = "you lose";
const PROMPT_TEXT: &str = "please enter your next guess";

/// What one stop in the game's output means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The game wants a guess; `text` is the normalized output preceding the prompt
    Prompt { text: String },
    Won,
    Lost,
}

/// Lowercase, trim, and collapse internal whitespace to single spaces
///
/// # Examples
/// ```
/// use hangman_marker::protocol::normalize;
///
/// assert_eq!(normalize("  You   LOSE!\n"), "you lose!");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classify one captured event
///
/// `prompted` tells whether the game has prompted at least once before; a game
/// that ends silently before its first prompt never followed the protocol.
///
/// # Errors
///
/// Returns the `ErrorKind` describing how the output broke the protocol.
pub fn classify(event: &RawEvent, prompted: bool) -> Result<Turn, ErrorKind> {
    let before = std::str::from_utf8(&event.before)
        .map(normalize)
        .map_err(|_| ErrorKind::BeforeDecodeError)?;

    let after = match &event.after {
        StopPoint::Eof => None,
        StopPoint::Marker(bytes) => Some(
            std::str::from_utf8(bytes)
                .map(normalize)
                .map_err(|_| ErrorKind::AfterDecodeError)?,
        ),
    };

    match after {
        None if before.contains(WIN_TEXT) => Ok(Turn::Won),
        None if before.contains(LOSS_TEXT) => Ok(Turn::Lost),
        None if prompted => Err(ErrorKind::ReturnError),
        None => Err(ErrorKind::ProtocolViolation),
        Some(after) if after.contains(PROMPT_TEXT) => Ok(Turn::Prompt { text: before }),
        Some(_) => Err(ErrorKind::ProtocolViolation),
    }
}
