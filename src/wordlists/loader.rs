//! Word list loading utilities
//!
//! Turns one-word-per-line text into a corpus: valid words only, lowercase,
//! first occurrence kept when a word repeats.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Outcome of parsing word list text
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub words: Vec<Word>,
    /// Non-blank lines that were not valid five-letter words
    pub rejected: usize,
    /// Lines repeating an earlier word
    pub duplicates: usize,
}

/// Parse word list text, skipping blank lines, invalid entries and repeats
#[must_use]
pub fn parse_word_list(content: &str) -> LoadReport {
    let mut report = LoadReport::default();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => {
                if seen.insert(word.text().to_string()) {
                    report.words.push(word);
                } else {
                    report.duplicates += 1;
                }
            }
            Err(err) => {
                trace!(line = trimmed, %err, "skipping word list entry");
                report.rejected += 1;
            }
        }
    }

    report
}

/// Load words from a file
///
/// Returns the valid, distinct words in file order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_sieve::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let report = parse_word_list(&content);

    debug!(
        path = %path.display(),
        words = report.words.len(),
        rejected = report.rejected,
        duplicates = report.duplicates,
        "loaded word list"
    );
    if report.rejected > 0 || report.duplicates > 0 {
        warn!(
            path = %path.display(),
            rejected = report.rejected,
            duplicates = report.duplicates,
            "skipped word list lines"
        );
    }

    Ok(report.words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_sieve::wordlists::loader::words_from_slice;
/// use wordle_sieve::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    slice
        .iter()
        .filter_map(|&s| Word::new(s).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}
