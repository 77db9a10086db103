//! Compact set of lowercase ASCII letters
//!
//! Letters are stored as bits of a `u32` (bit 0 = 'a', bit 25 = 'z').

use crate::error::ClueError;
use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Normalize a clue character to a lowercase ASCII byte
///
/// # Errors
/// Returns `ClueError::InvalidLetter` if `ch` is not an ASCII letter.
pub fn normalize_letter(ch: char) -> Result<u8, ClueError> {
    if ch.is_ascii_alphabetic() {
        Ok(ch.to_ascii_lowercase() as u8)
    } else {
        Err(ClueError::InvalidLetter(ch))
    }
}

/// Index of a lowercase ASCII letter in the alphabet, or `None` for anything else
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a set from lowercase letter bytes, ignoring anything else
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        for &letter in letters {
            set.insert(letter);
        }
        set
    }

    /// Add a letter; returns `false` if it was not a lowercase ASCII letter
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(idx) => {
                self.0 |= 1 << idx;
                true
            }
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(idx) => self.0 & (1 << idx) != 0,
            None => false,
        }
    }

    /// True if the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8)
            .filter(move |&idx| self.0 & (1 << idx) != 0)
            .map(|idx| b'a' + idx)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
