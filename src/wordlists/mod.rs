//! Word lists for hangman solving
//!
//! Provides the embedded reference word list and the read-only `Dictionary`
//! shared by every game.

mod embedded;
pub mod loader;

use crate::core::Word;

pub use embedded::{WORDS, WORDS_COUNT};

/// The fixed set of words the hidden word is drawn from
///
/// Built once and only ever borrowed, so any number of concurrent games can
/// share it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The embedded reference word list
    #[must_use]
    pub fn embedded() -> Self {
        loader::dictionary_from_slice(WORDS)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words with exactly `length` letters, in dictionary order
    pub fn of_length(&self, length: usize) -> impl Iterator<Item = &Word> + '_ {
        self.words.iter().filter(move |w| w.len() == length)
    }
}
