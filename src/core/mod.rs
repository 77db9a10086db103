//! Core domain types
//!
//! Words, clues and game feedback. Everything here is pure data with
//! validation at construction; nothing performs I/O or logs.

mod clues;
mod feedback;
mod letters;
mod word;

pub use clues::{Clues, KnownPattern, PositionalExclusion};
pub use feedback::{Feedback, Mark};
pub use letters::{ALPHABET_SIZE, LetterSet, letter_index, normalize_letter};
pub use word::{WORD_LENGTH, Word};
