//! Word scoring and guess suggestion
//!
//! A word's score is the sum of the frequency table counts of its distinct
//! letters, so words covering many common letters rank first.

use super::frequency::LetterFrequencyTable;
use crate::core::Word;
use crate::error::RankError;

/// A word paired with its frequency score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: u32,
}

/// Maximum number of suggestions to return
///
/// Built from a signed count with [`Limit::try_from`], which rejects negative
/// values, or directly from a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Limit(usize);

impl Limit {
    /// No truncation
    pub const ALL: Self = Self(usize::MAX);

    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Limit {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for Limit {
    type Error = RankError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        usize::try_from(count)
            .map(Self)
            .map_err(|_| RankError::InvalidLimit(count))
    }
}

/// Score a word against a frequency table
///
/// Each distinct letter counts once; letters missing from the table add 0.
///
/// # Examples
/// ```
/// use wordle_sieve::core::Word;
/// use wordle_sieve::ranker::{LetterFrequencyTable, score};
///
/// let mut counts = [0u32; 26];
/// counts[usize::from(b'e' - b'a')] = 10;
/// counts[usize::from(b'r' - b'a')] = 5;
/// counts[usize::from(b'i' - b'a')] = 3;
/// let table = LetterFrequencyTable::from_counts(counts, 10);
///
/// let eerie = Word::new("eerie").unwrap();
/// assert_eq!(score(&eerie, &table), 18);
/// ```
#[inline]
#[must_use]
pub fn score(word: &Word, table: &LetterFrequencyTable) -> u32 {
    word.letters().iter().map(|letter| table.get(letter)).sum()
}

/// Rank `words` by score, highest first, and keep the top `limit`
///
/// Words with equal scores keep their input order.
#[must_use]
pub fn suggest<'a, I>(words: I, table: &LetterFrequencyTable, limit: Limit) -> Vec<ScoredWord<'a>>
where
    I: IntoIterator<Item = &'a Word>,
{
    if limit.get() == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredWord<'a>> = words
        .into_iter()
        .map(|word| ScoredWord {
            word,
            score: score(word, table),
        })
        .collect();

    // Vec::sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit.get());
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::letter_index;

    fn table(entries: &[(u8, u32)]) -> LetterFrequencyTable {
        let mut counts = [0u32; 26];
        for &(letter, count) in entries {
            counts[letter_index(letter).unwrap()] = count;
        }
        LetterFrequencyTable::from_counts(counts, 100)
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(scored: &[ScoredWord]) -> Vec<String> {
        scored.iter().map(|s| s.word.text().to_string()).collect()
    }

    #[test]
    fn repeated_letter_scores_once() {
        let table = table(&[(b'e', 10), (b'r', 5), (b'i', 3)]);
        assert_eq!(score(&Word::new("eerie").unwrap(), &table), 18);
    }

    #[test]
    fn unseen_letters_score_zero() {
        let table = table(&[(b'a', 4)]);
        assert_eq!(score(&Word::new("fuzzy").unwrap(), &table), 0);
        assert_eq!(score(&Word::new("pizza").unwrap(), &table), 4);
    }

    #[test]
    fn suggest_sorts_descending() {
        let table = table(&[(b'e', 9), (b'a', 8), (b's', 7), (b't', 6), (b'l', 1)]);
        let corpus = words(&["pudgy", "slate", "crane", "tease"]);

        let ranked = suggest(&corpus, &table, Limit::ALL);
        assert_eq!(texts(&ranked), vec!["slate", "tease", "crane", "pudgy"]);
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert_eq!(ranked[0].score, 31);
    }

    #[test]
    fn ties_keep_input_order() {
        let table = table(&[(b'a', 1)]);
        let corpus = words(&["llama", "bravo", "mocha", "pudgy", "afoul"]);

        let ranked = suggest(&corpus, &table, Limit::ALL);
        assert_eq!(
            texts(&ranked),
            vec!["llama", "bravo", "mocha", "afoul", "pudgy"]
        );

        let reversed: Vec<&Word> = corpus.iter().rev().collect();
        let ranked = suggest(reversed, &table, Limit::ALL);
        assert_eq!(
            texts(&ranked),
            vec!["afoul", "mocha", "bravo", "llama", "pudgy"]
        );
    }

    #[test]
    fn limit_truncates() {
        let table = table(&[(b'e', 3), (b'a', 2)]);
        let corpus = words(&["crane", "slate", "pudgy"]);

        assert!(suggest(&corpus, &table, Limit::new(0)).is_empty());
        assert_eq!(suggest(&corpus, &table, Limit::new(2)).len(), 2);
        assert_eq!(suggest(&corpus, &table, Limit::new(3)).len(), 3);
        assert_eq!(suggest(&corpus, &table, Limit::new(50)).len(), 3);
    }

    #[test]
    fn limit_from_signed() {
        assert_eq!(Limit::try_from(0_i64), Ok(Limit::new(0)));
        assert_eq!(Limit::try_from(12_i64), Ok(Limit::new(12)));
        assert_eq!(Limit::try_from(-1_i64), Err(RankError::InvalidLimit(-1)));
    }

    #[test]
    fn empty_input_suggests_nothing() {
        let table = table(&[(b'e', 3)]);
        assert!(suggest(std::iter::empty(), &table, Limit::ALL).is_empty());
    }
}
