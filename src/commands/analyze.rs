//! Letter frequency analysis command
//!
//! Reports the frequency table behind the ranking, and how a single word
//! scores against it.

use crate::core::Word;
use crate::ranker::Limit;
use crate::session::Session;
use anyhow::{Context, Result, bail};

/// One row of the frequency report
#[derive(Debug, Clone, PartialEq)]
pub struct LetterStat {
    pub letter: char,
    /// Words containing the letter
    pub count: u32,
    /// Fraction of words containing the letter
    pub share: f64,
}

/// Frequency table of a word list, most common letter first
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word_count: usize,
    pub letters: Vec<LetterStat>,
}

/// How one word scores against the frequency table
#[derive(Debug, Clone)]
pub struct WordAnalysis {
    pub word: String,
    pub score: u32,
    /// 1-based position in the opener ranking
    pub rank: usize,
    pub total_words: usize,
    /// Count contributed by each distinct letter, in word order
    pub contributions: Vec<(char, u32)>,
}

/// Summarise the session's frequency table
#[must_use]
pub fn analyze_word_list(session: &Session) -> AnalysisResult {
    let table = session.ranker().table();
    let letters = table
        .by_frequency()
        .into_iter()
        .map(|(letter, count)| LetterStat {
            letter: char::from(letter),
            count,
            share: table.share(letter),
        })
        .collect();

    AnalysisResult {
        word_count: table.word_count(),
        letters,
    }
}

/// Score a single word and locate it in the opener ranking
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the session's word list
pub fn analyze_word(word: &str, session: &Session) -> Result<WordAnalysis> {
    let word_obj = Word::new(word).with_context(|| format!("Invalid word '{word}'"))?;

    if !session.corpus().contains(&word_obj) {
        bail!("Word '{word}' not in word list");
    }

    let ranked = session.openers(Limit::ALL);
    let rank = ranked
        .iter()
        .position(|scored| scored.word == &word_obj)
        .map_or(ranked.len(), |idx| idx + 1);

    let table = session.ranker().table();
    let mut contributions: Vec<(char, u32)> = Vec::new();
    for &letter in word_obj.chars() {
        let shown = char::from(letter);
        if contributions.iter().all(|&(seen, _)| seen != shown) {
            contributions.push((shown, table.get(letter)));
        }
    }

    Ok(WordAnalysis {
        word: word_obj.text().to_string(),
        score: session.ranker().score(&word_obj),
        rank,
        total_words: ranked.len(),
        contributions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_embedded_list() {
        let words = words_from_slice(WORDS);
        let session = Session::new(&words).unwrap();

        let result = analyze_word_list(&session);
        assert_eq!(result.word_count, WORDS.len());
        assert_eq!(result.letters.len(), 26);
        assert_eq!(result.letters[0].letter, 'e');
        assert!(result
            .letters
            .windows(2)
            .all(|pair| pair[0].count >= pair[1].count));
        assert!(result.letters.iter().all(|s| (0.0..=1.0).contains(&s.share)));
    }

    #[test]
    fn analyze_valid_word() {
        let words = words_from_slice(WORDS);
        let session = Session::new(&words).unwrap();

        let result = analyze_word("IRATE", &session).unwrap();
        assert_eq!(result.word, "irate");
        assert_eq!(result.rank, 1);
        assert_eq!(result.total_words, WORDS.len());
        assert_eq!(
            result.contributions.iter().map(|&(_, n)| n).sum::<u32>(),
            result.score
        );
    }

    #[test]
    fn analyze_repeated_letters() {
        let words = words_from_slice(&["eerie", "crane"]);
        let session = Session::new(&words).unwrap();

        let result = analyze_word("eerie", &session).unwrap();
        assert_eq!(result.contributions, vec![('e', 2), ('r', 2), ('i', 1)]);
        assert_eq!(result.score, 5);
        assert_eq!(result.rank, 2);
    }

    #[test]
    fn analyze_invalid_word() {
        let words = words_from_slice(&["crane"]);
        let session = Session::new(&words).unwrap();

        assert!(analyze_word("zzzzz", &session).is_err());
        assert!(analyze_word("toolong", &session).is_err());
    }
}
