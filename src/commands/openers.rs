//! Opening guess command
//!
//! Ranks the whole word list with no clues applied.

use super::query::QueryMatch;
use crate::ranker::Limit;
use crate::session::Session;
use anyhow::Result;
use tracing::debug;

/// Best opening guesses for a session's word list
///
/// # Errors
///
/// Returns an error if `limit` is negative.
///
/// # Examples
/// ```
/// use wordle_sieve::commands::run_openers;
/// use wordle_sieve::session::Session;
/// use wordle_sieve::wordlists::{WORDS, loader::words_from_slice};
///
/// let words = words_from_slice(WORDS);
/// let session = Session::new(&words).unwrap();
/// let openers = run_openers(&session, 3).unwrap();
/// assert_eq!(openers[0].word, "irate");
/// ```
pub fn run_openers(session: &Session, limit: i64) -> Result<Vec<QueryMatch>> {
    let limit = Limit::try_from(limit)?;
    let openers = session.openers(limit);
    debug!(count = openers.len(), corpus = session.corpus().len(), "ranked openers");

    Ok(openers
        .into_iter()
        .map(|scored| QueryMatch {
            word: scored.word.text().to_string(),
            score: Some(scored.score),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn openers_on_small_list() {
        let words = words_from_slice(&["fuzzy", "slate", "crane", "tease"]);
        let session = Session::new(&words).unwrap();

        let openers = run_openers(&session, 2).unwrap();
        assert_eq!(openers.len(), 2);
        assert!(openers.iter().all(|m| m.word != "fuzzy"));
        assert!(openers[0].score >= openers[1].score);
    }

    #[test]
    fn openers_limit_validation() {
        let words = words_from_slice(&["slate"]);
        let session = Session::new(&words).unwrap();

        assert!(run_openers(&session, 0).unwrap().is_empty());
        assert_eq!(run_openers(&session, 10).unwrap().len(), 1);
        assert!(run_openers(&session, -1).is_err());
    }
}
