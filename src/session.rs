//! Query session
//!
//! Holds a borrowed word list and the frequency ranker analysed from it, so
//! repeated queries filter and rank without re-analysing.

use crate::core::{Clues, Word};
use crate::error::RankError;
use crate::filter::{FilterDiagnostics, filter_with_diagnostics};
use crate::ranker::{FrequencyRanker, Limit, ScoredWord};

/// Ranked candidates for one set of clues
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    /// Candidates, best score first
    pub candidates: Vec<ScoredWord<'a>>,
    /// How many corpus words matched the clues before truncation
    pub total_matches: usize,
    pub diagnostics: FilterDiagnostics,
}

/// A word list with its letter frequency analysis
///
/// # Examples
/// ```
/// use wordle_sieve::core::{Clues, Word};
/// use wordle_sieve::ranker::Limit;
/// use wordle_sieve::session::Session;
///
/// let corpus: Vec<Word> = ["slate", "crane", "stomp", "trace"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let session = Session::new(&corpus).unwrap();
///
/// let clues = Clues::new(&[None; 5], &[], &['s']).unwrap();
/// let ranking = session.rank(&clues, Limit::ALL);
///
/// assert_eq!(ranking.total_matches, 2);
/// assert!(ranking.candidates.iter().all(|c| !c.word.has_letter(b's')));
/// ```
#[derive(Debug, Clone)]
pub struct Session<'a> {
    corpus: &'a [Word],
    ranker: FrequencyRanker,
}

impl<'a> Session<'a> {
    /// Analyse `corpus` and use it both as the filter pool and the frequency reference
    ///
    /// # Errors
    /// Returns `RankError::EmptyCorpus` if `corpus` is empty.
    pub fn new(corpus: &'a [Word]) -> Result<Self, RankError> {
        Ok(Self {
            corpus,
            ranker: FrequencyRanker::new(corpus)?,
        })
    }

    /// Filter `corpus` but score against an already analysed ranker
    #[must_use]
    pub const fn with_ranker(corpus: &'a [Word], ranker: FrequencyRanker) -> Self {
        Self { corpus, ranker }
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &'a [Word] {
        self.corpus
    }

    #[inline]
    #[must_use]
    pub const fn ranker(&self) -> &FrequencyRanker {
        &self.ranker
    }

    /// Filter the corpus by `clues` and rank the survivors
    #[must_use]
    pub fn rank(&self, clues: &Clues, limit: Limit) -> Ranking<'a> {
        let filtered = filter_with_diagnostics(self.corpus, clues);
        let total_matches = filtered.words.len();
        let candidates = self.ranker.suggest(filtered.words, limit);

        Ranking {
            candidates,
            total_matches,
            diagnostics: filtered.diagnostics,
        }
    }

    /// Best opening guesses: the whole corpus ranked with no clues
    #[must_use]
    pub fn openers(&self, limit: Limit) -> Vec<ScoredWord<'a>> {
        self.ranker.suggest(self.corpus, limit)
    }
}
