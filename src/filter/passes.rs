//! Individual narrowing passes
//!
//! Each pass is a pure subset filter over the survivors of the previous one,
//! keeping their relative order.

use crate::core::{KnownPattern, LetterSet, PositionalExclusion, Word};

/// Keep words with the required letter in every constrained slot
pub fn known_pass(words: &mut Vec<&Word>, known: &KnownPattern) {
    if known.is_empty() {
        return;
    }
    words.retain(|word| known.matches(word));
}

/// Keep words containing each misplaced letter, but not at its excluded slot
pub fn misplaced_pass<'p, I>(words: &mut Vec<&Word>, misplaced: I)
where
    I: IntoIterator<Item = &'p PositionalExclusion>,
{
    let pairs: Vec<&PositionalExclusion> = misplaced.into_iter().collect();
    if pairs.is_empty() {
        return;
    }
    words.retain(|word| pairs.iter().all(|pair| pair.matches(word)));
}

/// Drop words containing any excluded letter
pub fn excluded_pass(words: &mut Vec<&Word>, excluded: LetterSet) {
    if excluded.is_empty() {
        return;
    }
    words.retain(|word| !word.letters().intersects(excluded));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Clues;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn known_pass_anchors_each_slot() {
        let corpus = words(&["apple", "angle", "amber", "maple"]);
        let mut survivors: Vec<&Word> = corpus.iter().collect();

        known_pass(&mut survivors, &KnownPattern::parse("a___e").unwrap());
        assert_eq!(texts(&survivors), vec!["apple", "angle"]);
    }

    #[test]
    fn known_pass_empty_pattern_keeps_all() {
        let corpus = words(&["apple", "angle"]);
        let mut survivors: Vec<&Word> = corpus.iter().collect();

        known_pass(&mut survivors, &KnownPattern::EMPTY);
        assert_eq!(survivors.len(), 2);
    }

    #[test]
    fn misplaced_pass_is_conjunctive() {
        let corpus = words(&["stalk", "crane", "trace", "react", "tears"]);
        let clues = Clues::new(&[None; 5], &[(0, 't'), (1, 'r')], &[]).unwrap();
        let mut survivors: Vec<&Word> = corpus.iter().collect();

        misplaced_pass(&mut survivors, clues.misplaced());
        // needs a T not first and an R not second
        assert_eq!(texts(&survivors), vec!["react"]);
    }

    #[test]
    fn misplaced_pass_same_letter_two_slots() {
        let corpus = words(&["alert", "later", "trail", "tiara"]);
        let clues = Clues::new(&[None; 5], &[(0, 'a'), (1, 'a')], &[]).unwrap();
        let mut survivors: Vec<&Word> = corpus.iter().collect();

        misplaced_pass(&mut survivors, clues.misplaced());
        assert_eq!(texts(&survivors), vec!["trail", "tiara"]);
    }

    #[test]
    fn excluded_pass_drops_any_excluded_letter() {
        let corpus = words(&["slate", "crane", "stomp"]);
        let mut survivors: Vec<&Word> = corpus.iter().collect();

        excluded_pass(&mut survivors, LetterSet::from_letters(b"s"));
        assert_eq!(texts(&survivors), vec!["crane"]);
    }
}
