//! Core domain types for the hangman marker
//!
//! This module contains the fundamental domain types with no process or I/O concerns.
//! All types here are pure and testable.

mod outcome;
mod pattern;
mod word;

pub use outcome::{ErrorKind, Outcome};
pub use pattern::{MASK, RevealedPattern};
pub use word::{Word, WordError};
