//! Guess selection
//!
//! Two phases: fixed vowels while nothing is revealed, then the most frequent
//! letter across the remaining candidates.

use crate::core::{ErrorKind, RevealedPattern, Word};
use std::collections::VecDeque;

/// Bootstrap guesses, in order
pub const BOOTSTRAP_VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Total occurrences of each letter across a set of words
///
/// A letter appearing twice in one word counts twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies([usize; 26]);

impl LetterFrequencies {
    pub fn tally<'w>(words: impl IntoIterator<Item = &'w Word>) -> Self {
        let mut counts = [0usize; 26];
        for word in words {
            for (total, &n) in counts.iter_mut().zip(word.letter_counts()) {
                *total += usize::from(n);
            }
        }
        Self(counts)
    }

    /// All 26 letters by descending count, ties in alphabetical order
    #[must_use]
    pub fn ranked(&self) -> Vec<(char, usize)> {
        let mut ranked: Vec<(char, usize)> = ('a'..='z').zip(self.0).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// A chosen letter and, in the frequency phase, the ranking it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub letter: char,
    pub ranking: Option<Vec<(char, usize)>>,
}

/// Bootstrap-then-frequency guess policy for one game
#[derive(Debug, Clone)]
pub struct GuessStrategy {
    vowels: VecDeque<char>,
}

impl Default for GuessStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            vowels: BOOTSTRAP_VOWELS.into_iter().collect(),
        }
    }

    /// Vowels not yet used for bootstrapping
    #[must_use]
    pub fn remaining_vowels(&self) -> usize {
        self.vowels.len()
    }

    /// Choose the next letter
    ///
    /// # Errors
    ///
    /// - `VowelExhaustion` when the pattern is still fully masked and every
    ///   bootstrap vowel has been used
    /// - `GuessExhaustion` when every letter already shows in the pattern
    pub fn next_guess(
        &mut self,
        pattern: &RevealedPattern,
        candidates: &[&Word],
    ) -> Result<Choice, ErrorKind> {
        if pattern.is_fully_masked() {
            let letter = self.vowels.pop_front().ok_or(ErrorKind::VowelExhaustion)?;
            return Ok(Choice {
                letter,
                ranking: None,
            });
        }

        let ranking = LetterFrequencies::tally(candidates.iter().copied()).ranked();
        let letter = ranking
            .iter()
            .map(|&(letter, _)| letter)
            .find(|&letter| !pattern.contains(letter))
            .ok_or(ErrorKind::GuessExhaustion)?;

        Ok(Choice {
            letter,
            ranking: Some(ranking),
        })
    }
}
