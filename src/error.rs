//! Error types for the filtering and ranking core
//!
//! All variants are input-validation failures. Zero matches, empty clue sets
//! and all-zero frequency tables are ordinary results, never errors.

use crate::core::WORD_LENGTH;
use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {len} letters, got {0}", len = WORD_LENGTH)]
    InvalidLength(usize),

    #[error("Word must contain only ASCII letters")]
    NonAscii,

    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// Error type for malformed clue input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    /// Known-position pattern does not have one slot per letter
    #[error("Known pattern must have exactly {len} slots, got {0}", len = WORD_LENGTH)]
    InvalidPatternLength(usize),

    /// Positional exclusion index outside the word
    #[error("Position {0} is out of range (expected 0..{len})", len = WORD_LENGTH)]
    InvalidPosition(usize),

    /// A clue slot held something other than a single ASCII letter
    #[error("'{0}' is not an ASCII letter")]
    InvalidLetter(char),

    /// Feedback string could not be parsed
    #[error("Invalid feedback '{0}': use G/Y/- (or 🟩🟨⬜) for each letter")]
    InvalidFeedback(String),

    /// A letter is both excluded and required
    ///
    /// Only reported by [`Clues::check_consistency`](crate::core::Clues::check_consistency);
    /// the filter itself accepts such clues and returns no candidates.
    #[error("Letter '{0}' is marked as excluded but is also required")]
    ContradictoryClue(char),
}

/// Error type for frequency analysis and ranking
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// Ranking limit was negative
    #[error("Limit must be zero or positive, got {0}")]
    InvalidLimit(i64),

    /// Frequency analysis needs at least one word
    #[error("Cannot analyze an empty word list")]
    EmptyCorpus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_mention_word_length() {
        assert_eq!(
            ClueError::InvalidPatternLength(3).to_string(),
            "Known pattern must have exactly 5 slots, got 3"
        );
        assert_eq!(
            ClueError::InvalidPosition(7).to_string(),
            "Position 7 is out of range (expected 0..5)"
        );
        assert_eq!(
            WordError::InvalidLength(8).to_string(),
            "Word must be exactly 5 letters, got 8"
        );
    }

    #[test]
    fn rank_error_messages() {
        assert_eq!(
            RankError::InvalidLimit(-2).to_string(),
            "Limit must be zero or positive, got -2"
        );
        assert_eq!(
            RankError::EmptyCorpus.to_string(),
            "Cannot analyze an empty word list"
        );
    }
}
