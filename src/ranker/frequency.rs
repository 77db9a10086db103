//! Letter frequency analysis
//!
//! Counts, for every letter, how many words of a reference list contain it.
//! A word contributes at most 1 to each letter no matter how often the letter
//! repeats ("eerie" adds 1 to E, R and I).

use crate::core::{ALPHABET_SIZE, Word, letter_index};
use crate::error::RankError;

/// Per-letter document frequency over a reference word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencyTable {
    counts: [u32; ALPHABET_SIZE],
    words: usize,
}

impl LetterFrequencyTable {
    /// Build a table from raw counts, indexed 'a'..='z'
    #[must_use]
    pub const fn from_counts(counts: [u32; ALPHABET_SIZE], words: usize) -> Self {
        Self { counts, words }
    }

    /// Number of words containing `letter`; 0 for unseen letters and non-letters
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u32 {
        letter_index(letter.to_ascii_lowercase()).map_or(0, |idx| self.counts[idx])
    }

    /// Number of words the table was built from
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }

    /// Fraction of analysed words containing `letter`
    #[must_use]
    pub fn share(&self, letter: u8) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        f64::from(self.get(letter)) / self.words as f64
    }

    /// Iterate over `(letter, count)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(idx, &count)| (b'a' + idx as u8, count))
    }

    /// Letters sorted by count descending, alphabetical among equals
    #[must_use]
    pub fn by_frequency(&self) -> Vec<(u8, u32)> {
        let mut letters: Vec<(u8, u32)> = self.iter().collect();
        letters.sort_by(|a, b| b.1.cmp(&a.1));
        letters
    }
}

/// Build the letter frequency table for `corpus`
///
/// Deterministic and independent of word order.
///
/// # Errors
/// Returns `RankError::EmptyCorpus` if `corpus` is empty.
///
/// # Examples
/// ```
/// use wordle_sieve::core::Word;
/// use wordle_sieve::ranker::analyze;
///
/// let corpus = vec![Word::new("eerie").unwrap(), Word::new("crane").unwrap()];
/// let table = analyze(&corpus).unwrap();
///
/// assert_eq!(table.get(b'e'), 2);
/// assert_eq!(table.get(b'r'), 2);
/// assert_eq!(table.get(b'z'), 0);
/// ```
pub fn analyze(corpus: &[Word]) -> Result<LetterFrequencyTable, RankError> {
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let mut counts = [0u32; ALPHABET_SIZE];
    for word in corpus {
        for letter in word.letters().iter() {
            if let Some(idx) = letter_index(letter) {
                counts[idx] += 1;
            }
        }
    }

    Ok(LetterFrequencyTable::from_counts(counts, corpus.len()))
}
