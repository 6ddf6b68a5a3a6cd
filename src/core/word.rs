//! Dictionary word representation
//!
//! A Word stores a lowercase word along with its per-letter occurrence counts,
//! which the frequency phase sums across candidates.

use std::fmt;

/// A lowercase ASCII word of any non-zero length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letter_counts: [u8; 26],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman_marker::core::Word;
    ///
    /// let word = Word::new("Breath").unwrap();
    /// assert_eq!(word.text(), "breath");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_counts = [0u8; 26];
        for &ch in text.as_bytes() {
            let slot = &mut letter_counts[usize::from(ch - b'a')];
            *slot = slot.saturating_add(1);
        }

        Ok(Self {
            text,
            letter_counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Occurrences of each letter `a..=z`, indexed from 0
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; 26] {
        &self.letter_counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("sugar").unwrap();
        assert_eq!(word.text(), "sugar");
        assert_eq!(word.bytes(), b"sugar");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("WE").unwrap();
        assert_eq!(word.text(), "we");

        let word2 = Word::new("CoNsTiTuTiOn").unwrap();
        assert_eq!(word2.text(), "constitution");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("interference").unwrap().len(), 12);
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
        assert!(matches!(Word::new("café"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("seek").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[usize::from(b'e' - b'a')], 2);
        assert_eq!(counts[usize::from(b's' - b'a')], 1);
        assert_eq!(counts[usize::from(b'k' - b'a')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("title").unwrap();
        assert_eq!(format!("{word}"), "title");
    }
}
