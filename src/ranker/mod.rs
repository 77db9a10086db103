//! Letter-frequency ranking
//!
//! [`analyze`] builds a [`LetterFrequencyTable`] from a reference word list
//! once; [`score`] and [`suggest`] then rank any list of words against it.

mod frequency;
mod scoring;

pub use frequency::{LetterFrequencyTable, analyze};
pub use scoring::{Limit, ScoredWord, score, suggest};

use crate::core::Word;
use crate::error::RankError;

/// Ranks words against a frequency table analysed once from a reference list
///
/// The table never changes after construction; build a new ranker to
/// re-analyse.
#[derive(Debug, Clone)]
pub struct FrequencyRanker {
    table: LetterFrequencyTable,
}

impl FrequencyRanker {
    /// Analyse `reference` and keep its table
    ///
    /// # Errors
    /// Returns `RankError::EmptyCorpus` if `reference` is empty.
    pub fn new(reference: &[Word]) -> Result<Self, RankError> {
        Ok(Self {
            table: analyze(reference)?,
        })
    }

    #[must_use]
    pub const fn from_table(table: LetterFrequencyTable) -> Self {
        Self { table }
    }

    #[inline]
    #[must_use]
    pub const fn table(&self) -> &LetterFrequencyTable {
        &self.table
    }

    #[inline]
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        score(word, &self.table)
    }

    /// Rank `words` highest score first, ties in input order
    #[must_use]
    pub fn suggest<'a, I>(&self, words: I, limit: Limit) -> Vec<ScoredWord<'a>>
    where
        I: IntoIterator<Item = &'a Word>,
    {
        suggest(words, &self.table, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;
    use crate::core::Clues;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn ranker_requires_words() {
        assert!(matches!(
            FrequencyRanker::new(&[]),
            Err(RankError::EmptyCorpus)
        ));
    }

    #[test]
    fn ranker_reuses_table_across_queries() {
        let corpus = words_from_slice(WORDS);
        let ranker = FrequencyRanker::new(&corpus).unwrap();
        let before = ranker.table().clone();

        for excluded in ['s', 'e', 'a'] {
            let clues = Clues::new(&[None; 5], &[], &[excluded]).unwrap();
            let ranked = ranker.suggest(filter(&corpus, &clues), Limit::new(5));
            assert!(ranked.len() <= 5);
            assert!(ranked.iter().all(|s| !s.word.has_letter(excluded as u8)));
        }

        assert_eq!(ranker.table(), &before);
    }

    #[test]
    fn best_openers_have_distinct_letters() {
        let corpus = words_from_slice(WORDS);
        let ranker = FrequencyRanker::new(&corpus).unwrap();

        let openers = ranker.suggest(&corpus, Limit::new(10));
        assert_eq!(openers.len(), 10);
        // Any repeated letter wastes a slot, so the top words use five letters
        assert!(openers.iter().all(|s| s.word.letters().len() == 5));
        assert_eq!(openers[0].score, ranker.score(openers[0].word));
    }
}
