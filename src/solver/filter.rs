//! Candidate narrowing from revealed positions
//!
//! The word length is fixed by the first prompt (its count of mask symbols).
//! After that only confirmed letter positions narrow the candidates; letters
//! guessed and found absent are not used.

use crate::core::{MASK, RevealedPattern, Word};
use crate::wordlists::Dictionary;

/// Dictionary words still consistent with what the game has revealed
#[derive(Debug, Clone)]
pub struct CandidateFilter<'a> {
    dictionary: &'a Dictionary,
    word_length: Option<usize>,
    candidates: Vec<&'a Word>,
    pattern: RevealedPattern,
}

impl<'a> CandidateFilter<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            word_length: None,
            candidates: Vec::new(),
            pattern: RevealedPattern::default(),
        }
    }

    /// Update from the normalized text that preceded a prompt
    pub fn observe(&mut self, text: &str) -> &RevealedPattern {
        let word_length = match self.word_length {
            Some(length) => length,
            None => {
                let length = text.chars().filter(|&c| c == MASK).count();
                let dictionary = self.dictionary;
                self.word_length = Some(length);
                self.candidates = dictionary.of_length(length).collect();
                length
            }
        };

        self.pattern = RevealedPattern::from_console(text, word_length);
        if !self.pattern.is_fully_masked() {
            let pattern = &self.pattern;
            self.candidates.retain(|word| pattern.matches(word));
        }
        &self.pattern
    }

    /// Word length, once the first prompt has been seen
    #[must_use]
    pub const fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn pattern(&self) -> &RevealedPattern {
        &self.pattern
    }
}
