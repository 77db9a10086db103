//! Game feedback for a single guess
//!
//! Each position of a guess is marked:
//! - Gray (letter not in word)
//! - Yellow (letter in word, wrong position)
//! - Green (letter in correct position)
//!
//! Feedback is what a player reads off the game board; [`Clues::record`]
//! turns it into filter clues.
//!
//! [`Clues::record`]: super::Clues::record

use super::letters::letter_index;
use super::{WORD_LENGTH, Word};
use crate::error::ClueError;
use std::fmt;

/// Feedback color for one letter of a guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Gray,
    Yellow,
    Green,
}

impl Mark {
    /// Parse a single feedback symbol
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'.'/⬜/⬛.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Gray),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Gray => '-',
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Mark::Green; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Calculate the feedback when `guess` is played and `secret` is hidden
    ///
    /// Follows the game's rules for duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches green and remove them from the pool
    /// 2. Second pass: mark present-but-misplaced letters yellow from what remains
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Gray; WORD_LENGTH];
        let mut available = secret.char_counts();

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                *mark = Mark::Green;
                if let Some(idx) = letter_index(letter) {
                    available[idx] = available[idx].saturating_sub(1);
                }
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Green {
                continue;
            }
            if let Some(idx) = letter_index(guess.char_at(i))
                && available[idx] > 0
            {
                *mark = Mark::Yellow;
                available[idx] -= 1;
            }
        }

        Self(marks)
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `ClueError::InvalidFeedback` if the string does not have exactly
    /// one valid symbol per letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, ClueError> {
        let invalid = || ClueError::InvalidFeedback(s.to_string());

        let mut marks = [Mark::Gray; WORD_LENGTH];
        let mut symbols = s.trim().chars();

        for mark in &mut marks {
            let ch = symbols.next().ok_or_else(invalid)?;
            *mark = Mark::from_symbol(ch).ok_or_else(invalid)?;
        }

        if symbols.next().is_some() {
            return Err(invalid());
        }

        Ok(Self(marks))
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert feedback to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, secret: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        Feedback::calculate(&guess, &secret).to_string()
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count(Mark::Green), 5);
        assert_eq!(Feedback::PERFECT.to_string(), "GGGGG");
    }

    #[test]
    fn all_gray() {
        assert_eq!(feedback("abcde", "fghij"), "-----");
    }

    #[test]
    fn all_green() {
        for word in ["crane", "slate", "audio", "eerie"] {
            assert_eq!(feedback(word, word), "GGGGG");
        }
    }

    #[test]
    fn duplicate_letters_yellow_from_pool() {
        // SPEED vs ERASE: S yellow, both E yellow (ERASE has two)
        assert_eq!(feedback("speed", "erase"), "Y-YY-");
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(feedback("robot", "floor"), "YY-G-");
    }

    #[test]
    fn duplicate_letter_beyond_pool_is_gray() {
        // Only one E in CRANE, taken by the green at position 4
        assert_eq!(feedback("eerie", "crane"), "--Y-G");
    }

    #[test]
    fn parse_valid() {
        let f1 = Feedback::parse("GYG--").unwrap();
        let f2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let f3 = Feedback::parse("gyg__").unwrap();
        let f4 = Feedback::parse(" gyg.. ").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1, f4);
        assert_eq!(f1.mark_at(1), Mark::Yellow);
    }

    #[test]
    fn parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_err());
        assert!(Feedback::parse("GYG").is_err());
        assert!(Feedback::parse("GXGGY").is_err());
        assert_eq!(
            Feedback::parse(""),
            Err(ClueError::InvalidFeedback(String::new()))
        );
    }

    #[test]
    fn emoji_round_trip_through_display() {
        let f = Feedback::parse("GY-GY").unwrap();
        assert_eq!(f.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(f.to_string(), "GY-GY");
    }
}
