//! Console transport to the game under test
//!
//! The solving loop only sees the `Console` trait; `Session` implements it over
//! a child process.

mod session;

pub use session::Session;

use crate::core::ErrorKind;
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;

/// Prompt printed by the game before every guess (matched ignoring ASCII case)
pub const PROMPT_MARKER: &[u8] = b"please enter your next guess: ";

/// Where the game stopped producing output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopPoint {
    /// The prompt marker, exactly as the game printed it
    Marker(Vec<u8>),
    /// Output stream closed
    Eof,
}

/// Output captured by one `await_prompt` call
///
/// `before` is everything printed since the previous stop point; `after` is
/// the stop point itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub before: Vec<u8>,
    pub after: StopPoint,
}

/// Line-oriented console of a running game
pub trait Console {
    /// Block until the prompt marker or end of output, or fail after `timeout`
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::ExpectError` if neither appears in time.
    fn await_prompt(&mut self, timeout: Duration) -> Result<RawEvent, ErrorKind>;

    /// Send one letter followed by a newline; delivery is not acknowledged
    fn send_guess(&mut self, letter: char);

    /// Release the game; safe to call more than once
    fn close(&mut self);
}

/// Command line that launches one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCommand {
    program: String,
    args: Vec<String>,
}

impl GameCommand {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Launch a game file: Python sources go through `interpreter`, anything
    /// else is executed directly
    ///
    /// A bare file name is run from the current directory, never looked up
    /// on `PATH`.
    ///
    /// # Examples
    /// ```
    /// use hangman_marker::transport::GameCommand;
    /// use std::path::Path;
    ///
    /// let cmd = GameCommand::for_game_file(Path::new("hangman.py"), "python3");
    /// assert_eq!(cmd.to_string(), "python3 hangman.py");
    /// ```
    #[must_use]
    pub fn for_game_file(path: &Path, interpreter: &str) -> Self {
        let file = path.display().to_string();
        if path.extension() == Some(OsStr::new("py")) {
            Self::new(interpreter).arg(file)
        } else if path.is_relative() && path.parent() == Some(Path::new("")) {
            Self::new(Path::new(".").join(path).display().to_string())
        } else {
            Self::new(file)
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::fmt::Display for GameCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
