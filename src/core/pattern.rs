//! Revealed word pattern
//!
//! The masked word as printed by the game: one character per position, with
//! `*` standing for a letter that has not been disclosed yet.

use super::Word;
use std::fmt;

/// Placeholder for an undisclosed letter
pub const MASK: char = '*';

/// The partially revealed word shown by the game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealedPattern(Vec<char>);

impl RevealedPattern {
    /// Take the trailing `word_length` characters of the console text
    ///
    /// Shorter text yields a shorter pattern rather than an error; positions
    /// beyond it impose no constraint.
    ///
    /// # Examples
    /// ```
    /// use hangman_marker::core::RevealedPattern;
    ///
    /// let pattern = RevealedPattern::from_console("the word is: *e", 2);
    /// assert_eq!(pattern.to_string(), "*e");
    /// ```
    #[must_use]
    pub fn from_console(text: &str, word_length: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let start = chars.len().saturating_sub(word_length);
        Self(chars[start..].to_vec())
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True while no letter has been disclosed
    #[must_use]
    pub fn is_fully_masked(&self) -> bool {
        self.0.iter().all(|&c| c == MASK)
    }

    /// Check whether `letter` is shown anywhere in the pattern
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    /// Disclosed positions and the character shown there
    pub fn revealed(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != MASK)
            .map(|(i, &c)| (i, c))
    }

    /// Check that `word` agrees with every disclosed position
    ///
    /// Masked positions match anything. A disclosed position past the end of
    /// the word never matches.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let bytes = word.bytes();
        self.revealed()
            .all(|(i, c)| bytes.get(i).is_some_and(|&b| char::from(b) == c))
    }
}

impl fmt::Display for RevealedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
