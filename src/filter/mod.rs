//! Candidate filtering
//!
//! Narrows a word list to the words consistent with a set of [`Clues`] in
//! three passes: known positions, misplaced letters, excluded letters. Each
//! pass only removes words, so the result is the same whatever the order and
//! always preserves the corpus order.

mod passes;

use crate::core::{Clues, Word};
use crate::error::ClueError;

/// Candidate counts after each filtering pass
///
/// Returned by [`filter_with_diagnostics`] for callers that want to report
/// how much each kind of clue narrowed the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterDiagnostics {
    /// Words before any pass
    pub corpus: usize,
    /// Survivors of the known-position pass
    pub after_known: usize,
    /// Survivors of the misplaced-letter pass
    pub after_misplaced: usize,
    /// Survivors of the excluded-letter pass (the final count)
    pub after_excluded: usize,
}

/// Survivors of a filter run together with its per-pass counts
#[derive(Debug, Clone)]
pub struct Filtered<'a> {
    pub words: Vec<&'a Word>,
    pub diagnostics: FilterDiagnostics,
}

/// Filter `corpus` down to the words consistent with `clues`
///
/// Returns an empty list, not an error, when nothing survives. With no clues
/// the whole corpus comes back unchanged.
///
/// # Examples
/// ```
/// use wordle_sieve::core::{Clues, Word};
/// use wordle_sieve::filter::filter;
///
/// let corpus: Vec<Word> = ["slate", "crane", "stomp"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let clues = Clues::new(&[None; 5], &[], &['s']).unwrap();
/// let survivors = filter(&corpus, &clues);
///
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].text(), "crane");
/// ```
#[must_use]
pub fn filter<'a>(corpus: &'a [Word], clues: &Clues) -> Vec<&'a Word> {
    filter_with_diagnostics(corpus, clues).words
}

/// Filter `corpus` and record how many words survive each pass
#[must_use]
pub fn filter_with_diagnostics<'a>(corpus: &'a [Word], clues: &Clues) -> Filtered<'a> {
    let mut words: Vec<&'a Word> = corpus.iter().collect();
    let mut diagnostics = FilterDiagnostics {
        corpus: words.len(),
        ..FilterDiagnostics::default()
    };

    passes::known_pass(&mut words, clues.known());
    diagnostics.after_known = words.len();

    passes::misplaced_pass(&mut words, clues.misplaced());
    diagnostics.after_misplaced = words.len();

    passes::excluded_pass(&mut words, clues.excluded());
    diagnostics.after_excluded = words.len();

    Filtered { words, diagnostics }
}

/// Filter from raw clue input
///
/// Validates the inputs as [`Clues::new`] does, then runs [`filter`].
///
/// # Errors
/// - `ClueError::InvalidPatternLength` if `known` does not have one slot per letter
/// - `ClueError::InvalidPosition` if a misplaced position is out of range
/// - `ClueError::InvalidLetter` if any letter is not an ASCII letter
pub fn filter_words<'a>(
    corpus: &'a [Word],
    known: &[Option<char>],
    misplaced: &[(usize, char)],
    excluded: &[char],
) -> Result<Vec<&'a Word>, ClueError> {
    let clues = Clues::new(known, misplaced, excluded)?;
    Ok(filter(corpus, &clues))
}

/// True if `word` satisfies every individual clue
///
/// The filter keeps exactly the corpus words for which this holds.
#[must_use]
pub fn satisfies(word: &Word, clues: &Clues) -> bool {
    clues.known().matches(word)
        && clues.misplaced().all(|pair| pair.matches(word))
        && !word.letters().intersects(clues.excluded())
}
