//! The solving loop
//!
//! Drives one game: await prompt, classify, narrow, guess, send, until the game
//! ends or breaks the protocol. The console is closed on every path.

use super::filter::CandidateFilter;
use super::strategy::GuessStrategy;
use super::transcript::{GameReport, Transcript, TurnRecord};
use crate::core::{ErrorKind, Outcome};
use crate::protocol::{self, Turn};
use crate::transport::{Console, GameCommand, Session};
use crate::wordlists::Dictionary;
use rustc_hash::FxHashSet;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Agent settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Longest wait for each prompt
    pub timeout: Duration,
    /// Interpreter used for `.py` game files
    pub interpreter: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(1),
            interpreter: "python3".to_string(),
        }
    }
}

/// Plays games against a fixed dictionary
pub struct Agent<'a> {
    dictionary: &'a Dictionary,
    config: AgentConfig,
}

impl<'a> Agent<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, config: AgentConfig) -> Self {
        Self { dictionary, config }
    }

    /// Launch the game and play it to the end
    ///
    /// The per-prompt timeout bounds each wait, not the game. A game that
    /// keeps prompting with the same partly revealed word gets the same
    /// letter back every turn, since only revealed letters are excluded, and
    /// the loop runs for as long as the game keeps prompting.
    #[instrument(skip_all, fields(command = %command))]
    pub fn play(&self, command: &GameCommand) -> GameReport {
        match Session::spawn(command) {
            Ok(mut session) => self.play_on(&mut session),
            Err(kind) => GameReport {
                outcome: Outcome::Error(kind),
                transcript: Transcript::default(),
            },
        }
    }

    /// Play one game on an already running console
    ///
    /// Same loop as [`Agent::play`]; `console` is closed before returning.
    pub fn play_on<C: Console>(&self, console: &mut C) -> GameReport {
        let mut transcript = Transcript::default();
        let outcome = self
            .run_turns(console, &mut transcript)
            .unwrap_or_else(Outcome::Error);
        console.close();

        info!(%outcome, turns = transcript.len(), "game finished");
        GameReport {
            outcome,
            transcript,
        }
    }

    fn run_turns<C: Console>(
        &self,
        console: &mut C,
        transcript: &mut Transcript,
    ) -> Result<Outcome, ErrorKind> {
        let mut filter = CandidateFilter::new(self.dictionary);
        let mut strategy = GuessStrategy::new();
        let mut guessed: FxHashSet<char> = FxHashSet::default();
        let mut prompted = false;

        loop {
            let event = console.await_prompt(self.config.timeout)?;
            let text = match protocol::classify(&event, prompted)? {
                Turn::Won => return Ok(Outcome::Win),
                Turn::Lost => return Ok(Outcome::Loss),
                Turn::Prompt { text } => text,
            };
            prompted = true;

            filter.observe(&text);
            let choice = strategy.next_guess(filter.pattern(), filter.candidates())?;

            if !guessed.insert(choice.letter) {
                warn!(letter = %choice.letter, "letter guessed again");
            }
            debug!(
                turn = transcript.len() + 1,
                pattern = %filter.pattern(),
                candidates = filter.candidates().len(),
                vowels_left = strategy.remaining_vowels(),
                guess = %choice.letter,
                "guessing"
            );

            transcript.push(TurnRecord {
                guess: choice.letter,
                revealed: filter.pattern().to_string(),
                candidates: filter
                    .candidates()
                    .iter()
                    .map(|w| w.text().to_string())
                    .collect(),
                ranking: choice.ranking,
            });
            console.send_guess(choice.letter);
        }
    }
}

/// Play one game with a fresh agent
#[must_use]
pub fn solve_game(command: &GameCommand, dictionary: &Dictionary, config: AgentConfig) -> GameReport {
    Agent::new(dictionary, config).play(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{RawEvent, StopPoint};
    use crate::wordlists::loader::dictionary_from_slice;
    use std::collections::VecDeque;

    /// Console that replays canned events and records what it was sent
    #[derive(Default)]
    struct ScriptedConsole {
        events: VecDeque<Result<RawEvent, ErrorKind>>,
        sent: Vec<char>,
        closed: usize,
    }

    impl ScriptedConsole {
        fn prompt(mut self, before: &str) -> Self {
            self.events.push_back(Ok(RawEvent {
                before: before.as_bytes().to_vec(),
                after: StopPoint::Marker(b"Please enter your next guess: ".to_vec()),
            }));
            self
        }

        fn end(mut self, before: &str) -> Self {
            self.events.push_back(Ok(RawEvent {
                before: before.as_bytes().to_vec(),
                after: StopPoint::Eof,
            }));
            self
        }

        fn fail(mut self, kind: ErrorKind) -> Self {
            self.events.push_back(Err(kind));
            self
        }
    }

    impl Console for ScriptedConsole {
        fn await_prompt(&mut self, _timeout: Duration) -> Result<RawEvent, ErrorKind> {
            self.events
                .pop_front()
                .unwrap_or(Err(ErrorKind::ExpectError))
        }

        fn send_guess(&mut self, letter: char) {
            self.sent.push(letter);
        }

        fn close(&mut self) {
            self.closed += 1;
        }
    }

    fn play(words: &[&str], console: &mut ScriptedConsole) -> GameReport {
        let dictionary = dictionary_from_slice(words);
        Agent::new(&dictionary, AgentConfig::default()).play_on(console)
    }

    #[test]
    fn win_through_frequency_phase() {
        let mut console = ScriptedConsole::default()
            .prompt("Word: **\n")
            .prompt("Wrong! **\n")
            .prompt("Correct! *e\n")
            .end("we\nCongratulations you win!\n");

        let report = play(&["we", "hut"], &mut console);

        assert_eq!(report.outcome, Outcome::Win);
        assert_eq!(console.sent, vec!['a', 'e', 'w']);
        assert_eq!(report.transcript.guesses(), "aew");
        assert_eq!(console.closed, 1);

        let last = &report.transcript.turns()[2];
        assert_eq!(last.revealed, "*e");
        assert_eq!(last.candidates, vec!["we"]);
        assert_eq!(last.ranking.as_ref().unwrap()[0], ('e', 1));
    }

    #[test]
    fn loss_regardless_of_history() {
        let mut console = ScriptedConsole::default()
            .prompt("***")
            .end("No lives left, you lose! The word was hut");

        let report = play(&["hut"], &mut console);

        assert_eq!(report.outcome, Outcome::Loss);
        assert_eq!(report.transcript.len(), 1);
        assert_eq!(console.closed, 1);
    }

    #[test]
    fn timeout_keeps_partial_transcript() {
        let mut console = ScriptedConsole::default()
            .prompt("***")
            .fail(ErrorKind::ExpectError);

        let report = play(&["hut"], &mut console);

        assert_eq!(report.outcome, Outcome::Error(ErrorKind::ExpectError));
        assert_eq!(report.transcript.guesses(), "a");
        assert_eq!(console.closed, 1);
    }

    #[test]
    fn end_before_any_prompt_is_protocol_violation() {
        let mut console = ScriptedConsole::default().end("Traceback (most recent call last)");

        let report = play(&["hut"], &mut console);

        assert_eq!(report.outcome, Outcome::Error(ErrorKind::ProtocolViolation));
        assert!(report.transcript.is_empty());
        assert_eq!(console.closed, 1);
    }

    #[test]
    fn silent_end_mid_game_is_return_error() {
        let mut console = ScriptedConsole::default().prompt("***").end("goodbye");

        let report = play(&["hut"], &mut console);

        assert_eq!(report.outcome, Outcome::Error(ErrorKind::ReturnError));
    }

    #[test]
    fn repeated_pattern_gets_the_same_letter() {
        let mut console = ScriptedConsole::default();
        for _ in 0..5 {
            console = console.prompt("Wrong! *e");
        }
        let mut console = console.end("No lives left, you lose!");

        let report = play(&["we", "be"], &mut console);

        assert_eq!(report.outcome, Outcome::Loss);
        assert_eq!(console.sent, vec!['b'; 5]);
        assert_eq!(report.transcript.len(), 5);
        assert_eq!(console.closed, 1);
    }

    #[test]
    fn vowel_exhaustion_after_six_misses() {
        let mut console = ScriptedConsole::default();
        for _ in 0..7 {
            console = console.prompt("***");
        }

        let report = play(&["brr"], &mut console);

        assert_eq!(report.outcome, Outcome::Error(ErrorKind::VowelExhaustion));
        assert_eq!(console.sent, vec!['a', 'e', 'i', 'o', 'u', 'y']);
        assert_eq!(console.closed, 1);
    }

    #[test]
    fn decode_failure_closes_console() {
        let mut console = ScriptedConsole::default();
        console.events.push_back(Ok(RawEvent {
            before: vec![0xff, b'*'],
            after: StopPoint::Marker(b"please enter your next guess: ".to_vec()),
        }));

        let report = play(&["hut"], &mut console);

        assert_eq!(report.outcome, Outcome::Error(ErrorKind::BeforeDecodeError));
        assert_eq!(console.closed, 1);
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let mut console = ScriptedConsole::default()
            .prompt("****")
            .prompt("*a**")
            .prompt("*a*t")
            .prompt("ca*t")
            .end("congratulations you win");

        let report = play(&["cast", "fast", "bath", "pace", "that", "lay"], &mut console);

        let sizes: Vec<usize> = report
            .transcript
            .turns()
            .iter()
            .map(|t| t.candidates.len())
            .collect();
        assert_eq!(sizes, vec![5, 4, 2, 1]);
        assert!(sizes.windows(2).all(|pair| pair[1] <= pair[0]));
        assert_eq!(report.outcome, Outcome::Win);
    }

    #[test]
    fn replaying_patterns_reproduces_guesses() {
        let script = ["Word: *****", "*****", "***a*", "s**a*", "s*ga*"];
        let words = ["sugar", "solid", "small", "saint", "means", "minus"];

        let run = || {
            let mut console = ScriptedConsole::default();
            for text in script {
                console = console.prompt(text);
            }
            play(&words, &mut console.end("you lose"))
        };

        let first = run();
        let second = run();
        assert_eq!(first.transcript, second.transcript);
        assert_eq!(first.outcome, Outcome::Loss);
    }
}
