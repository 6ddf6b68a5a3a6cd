//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::Dictionary;
use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Blank lines and entries that are not plain ASCII words are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman_marker::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("read word list {}", path.display()))?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(Dictionary::new(words))
}

/// Convert embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use hangman_marker::wordlists::loader::dictionary_from_slice;
/// use hangman_marker::wordlists::WORDS;
///
/// let dictionary = dictionary_from_slice(WORDS);
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::new(slice.iter().filter_map(|&s| Word::new(s).ok()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dictionary_from_slice_converts_valid_words() {
        let dictionary = dictionary_from_slice(&["we", "sugar", "interference"]);

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.words()[0].text(), "we");
        assert_eq!(dictionary.words()[2].text(), "interference");
    }

    #[test]
    fn dictionary_from_slice_skips_invalid() {
        let dictionary = dictionary_from_slice(&["hut", "two words", "", "tip"]);

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "hut");
        assert_eq!(dictionary.words()[1].text(), "tip");
    }

    #[test]
    fn load_from_file_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Bath\n\n  soul  \nx-ray").unwrap();

        let dictionary = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["bath", "soul"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("/definitely/not/here.txt");
        assert!(result.is_err());
    }
}
