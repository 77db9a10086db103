//! Clue query command
//!
//! Builds clues from user input, filters the word list and ranks what is left.

use crate::core::{Clues, Feedback, KnownPattern, Word};
use crate::error::ClueError;
use crate::filter::{FilterDiagnostics, filter_with_diagnostics};
use crate::ranker::Limit;
use crate::session::Session;
use anyhow::{Context, Result, bail};
use tracing::debug;

/// Default number of results shown before the list counts as "too many"
pub const DEFAULT_MAX_RESULTS: usize = 300;

/// Configuration for a clue query
///
/// Clue fields hold raw user text; [`QueryConfig::clues`] validates them.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Known letters such as `"a___e"`
    pub known: Option<String>,
    /// Misplaced-letter rows such as `"_r__t"`, one per guess
    pub misplaced: Vec<String>,
    /// Letters absent from the word, such as `"sxz"`
    pub excluded: Option<String>,
    /// Played guesses with their feedback, such as `"crane=g-y--"`
    pub feedback: Vec<String>,
    /// Maximum number of suggestions; negative values are rejected
    pub limit: i64,
    /// Sort by frequency score instead of keeping word list order
    pub ranked: bool,
    /// Display cutoff for very long result lists
    pub max_results: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            known: None,
            misplaced: Vec::new(),
            excluded: None,
            feedback: Vec::new(),
            limit: 20,
            ranked: true,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl QueryConfig {
    /// Validate the raw clue fields and combine them
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field if any clue is malformed.
    pub fn clues(&self) -> Result<Clues> {
        let mut clues = Clues::default();

        for entry in &self.feedback {
            let (guess, feedback) = parse_feedback_entry(entry)?;
            clues.record(&guess, feedback);
        }

        if let Some(known) = &self.known {
            let pattern =
                KnownPattern::parse(known).with_context(|| format!("Invalid --known '{known}'"))?;
            let mut merged = *clues.known();
            for (position, letter) in pattern.constrained() {
                merged.set(position, Some(char::from(letter)))?;
            }
            clues = clues.with_known(merged);
        }

        for row in &self.misplaced {
            let row_pattern =
                KnownPattern::parse(row).with_context(|| format!("Invalid --misplaced '{row}'"))?;
            clues.add_misplaced_row(&row_pattern);
        }

        if let Some(excluded) = &self.excluded {
            clues
                .exclude_all(excluded)
                .with_context(|| format!("Invalid --excluded '{excluded}'"))?;
        }

        Ok(clues)
    }
}

/// One word in a query result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatch {
    pub word: String,
    /// Frequency score, absent when results keep word list order
    pub score: Option<u32>,
}

/// Result of a clue query
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub clues: Clues,
    pub matches: Vec<QueryMatch>,
    /// All corpus words consistent with the clues
    pub total_matches: usize,
    /// The max-results cap, not the requested count, hid some matches
    pub truncated: bool,
    pub diagnostics: FilterDiagnostics,
    /// Set when a letter is both excluded and required
    pub contradiction: Option<ClueError>,
}

/// Parse a `guess=feedback` entry such as `"crane=g-y--"`
///
/// `:` is accepted in place of `=`.
///
/// # Errors
///
/// Returns an error if the entry has no separator, the guess is not a valid
/// word or the feedback is malformed.
pub fn parse_feedback_entry(entry: &str) -> Result<(Word, Feedback)> {
    let Some((guess, marks)) = entry.split_once(['=', ':']) else {
        bail!("Invalid --feedback '{entry}': expected GUESS=FEEDBACK, e.g. crane=g-y--");
    };

    let guess = Word::new(guess.trim()).with_context(|| format!("Invalid guess in '{entry}'"))?;
    let feedback = Feedback::parse(marks)?;
    Ok((guess, feedback))
}

/// Run a clue query against a session
///
/// # Errors
///
/// Returns an error if the clues are malformed or the limit is negative.
pub fn run_query(config: &QueryConfig, session: &Session) -> Result<QueryResult> {
    let clues = config.clues()?;
    let limit = Limit::try_from(config.limit)?;
    let capped = config.max_results < limit.get();
    let shown = Limit::new(limit.get().min(config.max_results));

    let mut result = query_clues(session, clues, shown, config.ranked);
    result.truncated &= capped;
    Ok(result)
}

/// Filter and optionally rank with already validated clues
///
/// At most `shown` matches are returned; `total_matches` still counts all.
#[must_use]
pub fn query_clues(session: &Session, clues: Clues, shown: Limit, ranked: bool) -> QueryResult {
    let contradiction = clues.check_consistency().err();
    if let Some(err) = &contradiction {
        debug!(%err, "contradictory clues");
    }

    let (matches, total_matches, diagnostics) = if ranked {
        let ranking = session.rank(&clues, shown);
        let matches = ranking
            .candidates
            .iter()
            .map(|scored| QueryMatch {
                word: scored.word.text().to_string(),
                score: Some(scored.score),
            })
            .collect::<Vec<_>>();
        (matches, ranking.total_matches, ranking.diagnostics)
    } else {
        let filtered = filter_with_diagnostics(session.corpus(), &clues);
        let total = filtered.words.len();
        let matches = filtered
            .words
            .iter()
            .take(shown.get())
            .map(|word| QueryMatch {
                word: word.text().to_string(),
                score: None,
            })
            .collect::<Vec<_>>();
        (matches, total, filtered.diagnostics)
    };

    debug!(
        corpus = diagnostics.corpus,
        after_known = diagnostics.after_known,
        after_misplaced = diagnostics.after_misplaced,
        after_excluded = diagnostics.after_excluded,
        "filter passes"
    );

    let truncated = total_matches > matches.len();
    if truncated {
        debug!(total_matches, shown = matches.len(), "result list truncated");
    }

    QueryResult {
        clues,
        matches,
        total_matches,
        truncated,
        diagnostics,
        contradiction,
    }
}
