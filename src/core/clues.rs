//! Clues gathered about the hidden word
//!
//! Three independent kinds of knowledge narrow the candidate list:
//! - [`KnownPattern`]: an exact letter at an exact position
//! - [`PositionalExclusion`]: a letter present somewhere, but not at a position
//! - excluded letters: letters absent from the word entirely
//!
//! All letters are normalized to lowercase on the way in.

use super::feedback::{Feedback, Mark};
use super::letters::{LetterSet, normalize_letter};
use super::{WORD_LENGTH, Word};
use crate::error::ClueError;
use std::collections::BTreeSet;
use std::fmt;

/// Characters accepted as "no letter here" when parsing pattern strings
const BLANK_SLOTS: [char; 5] = ['_', '.', '-', '?', ' '];

/// Per-position letters that must appear exactly where given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KnownPattern([Option<u8>; WORD_LENGTH]);

impl KnownPattern {
    /// A pattern with every slot unconstrained
    pub const EMPTY: Self = Self([None; WORD_LENGTH]);

    /// Build a pattern from one optional letter per slot
    ///
    /// # Errors
    /// - `ClueError::InvalidPatternLength` if `slots` does not have exactly
    ///   [`WORD_LENGTH`] entries
    /// - `ClueError::InvalidLetter` if a slot holds a non-letter
    pub fn new(slots: &[Option<char>]) -> Result<Self, ClueError> {
        if slots.len() != WORD_LENGTH {
            return Err(ClueError::InvalidPatternLength(slots.len()));
        }

        let mut pattern = Self::EMPTY;
        for (slot, &letter) in pattern.0.iter_mut().zip(slots) {
            *slot = letter.map(normalize_letter).transpose()?;
        }
        Ok(pattern)
    }

    /// Parse a pattern string such as `"a___e"` or `"A..LE"`
    ///
    /// Blank slots may be written as `_`, `.`, `-`, `?` or a space.
    ///
    /// # Errors
    /// Same as [`KnownPattern::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::KnownPattern;
    ///
    /// let pattern = KnownPattern::parse("a___E").unwrap();
    /// assert_eq!(pattern.slot(0), Some(b'a'));
    /// assert_eq!(pattern.slot(1), None);
    /// assert_eq!(pattern.slot(4), Some(b'e'));
    /// assert!(KnownPattern::parse("a__e").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ClueError> {
        let slots: Vec<Option<char>> = s
            .chars()
            .map(|ch| (!BLANK_SLOTS.contains(&ch)).then_some(ch))
            .collect();
        Self::new(&slots)
    }

    /// The required letter at `position`, if any
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn slot(&self, position: usize) -> Option<u8> {
        self.0[position]
    }

    /// Set or clear the letter at `position`
    ///
    /// # Errors
    /// - `ClueError::InvalidPosition` if position >= [`WORD_LENGTH`]
    /// - `ClueError::InvalidLetter` if `letter` is not an ASCII letter
    pub fn set(&mut self, position: usize, letter: Option<char>) -> Result<(), ClueError> {
        let slot = self
            .0
            .get_mut(position)
            .ok_or(ClueError::InvalidPosition(position))?;
        *slot = letter.map(normalize_letter).transpose()?;
        Ok(())
    }

    /// Iterate over constrained slots as `(position, letter)`
    pub fn constrained(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|letter| (i, letter)))
    }

    /// Letters appearing anywhere in the pattern
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.0.iter().flatten().copied().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// True if every constrained slot holds the word's letter at that position
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.constrained()
            .all(|(position, letter)| word.char_at(position) == letter)
    }
}

impl fmt::Display for KnownPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            match slot {
                Some(letter) => write!(f, "{}", *letter as char)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for KnownPattern {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A letter known to be in the word but not at `position`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionalExclusion {
    position: usize,
    letter: u8,
}

impl PositionalExclusion {
    /// # Errors
    /// - `ClueError::InvalidPosition` if position >= [`WORD_LENGTH`]
    /// - `ClueError::InvalidLetter` if `letter` is not an ASCII letter
    pub fn new(position: usize, letter: char) -> Result<Self, ClueError> {
        if position >= WORD_LENGTH {
            return Err(ClueError::InvalidPosition(position));
        }
        Ok(Self {
            position,
            letter: normalize_letter(letter)?,
        })
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    /// True if the word contains the letter, and not at the excluded position
    #[inline]
    #[must_use]
    pub const fn matches(&self, word: &Word) -> bool {
        word.has_letter(self.letter) && word.char_at(self.position) != self.letter
    }
}

impl fmt::Display for PositionalExclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.letter as char, self.position)
    }
}

/// Everything known about the hidden word
///
/// # Examples
/// ```
/// use wordle_sieve::core::Clues;
///
/// let clues = Clues::new(
///     &[Some('a'), None, None, None, Some('e')],
///     &[(1, 'l')],
///     &['s', 't'],
/// )
/// .unwrap();
///
/// assert_eq!(clues.known().to_string(), "a___e");
/// assert_eq!(clues.excluded().to_string(), "st");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clues {
    known: KnownPattern,
    misplaced: BTreeSet<PositionalExclusion>,
    excluded: LetterSet,
}

impl Clues {
    /// Build clues from raw slot, pair and letter input
    ///
    /// # Errors
    /// - `ClueError::InvalidPatternLength` if `known` does not have one slot per letter
    /// - `ClueError::InvalidPosition` if a misplaced position is out of range
    /// - `ClueError::InvalidLetter` if any letter is not an ASCII letter
    pub fn new(
        known: &[Option<char>],
        misplaced: &[(usize, char)],
        excluded: &[char],
    ) -> Result<Self, ClueError> {
        let mut clues = Self::default().with_known(KnownPattern::new(known)?);
        for &(position, letter) in misplaced {
            clues.add_misplaced(position, letter)?;
        }
        for &letter in excluded {
            clues.exclude(letter)?;
        }
        Ok(clues)
    }

    /// Build clues from the feedback of a single guess
    #[must_use]
    pub fn from_feedback(guess: &Word, feedback: Feedback) -> Self {
        let mut clues = Self::default();
        clues.record(guess, feedback);
        clues
    }

    #[must_use]
    pub fn with_known(mut self, known: KnownPattern) -> Self {
        self.known = known;
        self
    }

    /// Add a present-but-misplaced letter
    ///
    /// # Errors
    /// - `ClueError::InvalidPosition` if position >= [`WORD_LENGTH`]
    /// - `ClueError::InvalidLetter` if `letter` is not an ASCII letter
    pub fn add_misplaced(&mut self, position: usize, letter: char) -> Result<&mut Self, ClueError> {
        self.misplaced
            .insert(PositionalExclusion::new(position, letter)?);
        Ok(self)
    }

    /// Add every letter of a row as misplaced at the position it occupies
    ///
    /// A row `"_r__t"` means R is in the word but not second, T is in the word
    /// but not last.
    pub fn add_misplaced_row(&mut self, row: &KnownPattern) -> &mut Self {
        for (position, letter) in row.constrained() {
            self.misplaced
                .insert(PositionalExclusion { position, letter });
        }
        self
    }

    /// Mark a letter as absent from the word
    ///
    /// # Errors
    /// Returns `ClueError::InvalidLetter` if `letter` is not an ASCII letter.
    pub fn exclude(&mut self, letter: char) -> Result<&mut Self, ClueError> {
        self.excluded.insert(normalize_letter(letter)?);
        Ok(self)
    }

    /// Mark every letter of `letters` as absent, ignoring whitespace and commas
    ///
    /// # Errors
    /// Returns `ClueError::InvalidLetter` on the first non-letter.
    pub fn exclude_all(&mut self, letters: &str) -> Result<&mut Self, ClueError> {
        for ch in letters.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            self.exclude(ch)?;
        }
        Ok(self)
    }

    /// Merge the feedback of one guess into the clues
    ///
    /// - green: the letter is known at that position
    /// - yellow: the letter is present but not at that position
    /// - gray: the letter is excluded, unless it is already known to be
    ///   present (marked elsewhere in this guess or by earlier clues), in
    ///   which case it only rules out that position
    pub fn record(&mut self, guess: &Word, feedback: Feedback) -> &mut Self {
        let mut present: LetterSet = feedback
            .marks()
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark != Mark::Gray)
            .map(|(i, _)| guess.char_at(i))
            .collect();
        present = present.union(self.required_letters());

        for (position, &mark) in feedback.marks().iter().enumerate() {
            let letter = guess.char_at(position);
            match mark {
                Mark::Green => self.known.0[position] = Some(letter),
                Mark::Yellow => {
                    self.misplaced
                        .insert(PositionalExclusion { position, letter });
                }
                Mark::Gray if present.contains(letter) => {
                    self.misplaced
                        .insert(PositionalExclusion { position, letter });
                }
                Mark::Gray => {
                    self.excluded.insert(letter);
                }
            }
        }
        self
    }

    #[inline]
    #[must_use]
    pub const fn known(&self) -> &KnownPattern {
        &self.known
    }

    pub fn misplaced(&self) -> impl ExactSizeIterator<Item = &PositionalExclusion> + '_ {
        self.misplaced.iter()
    }

    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    /// Letters the word must contain: known letters plus misplaced letters
    #[must_use]
    pub fn required_letters(&self) -> LetterSet {
        self.misplaced
            .iter()
            .map(PositionalExclusion::letter)
            .collect::<LetterSet>()
            .union(self.known.letters())
    }

    /// True if no clue of any kind has been given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.misplaced.is_empty() && self.excluded.is_empty()
    }

    /// Report a letter that is both excluded and required
    ///
    /// The filter accepts contradictory clues (and finds nothing); this check
    /// is for callers that want to warn about them first.
    ///
    /// # Errors
    /// Returns `ClueError::ContradictoryClue` naming the first such letter.
    pub fn check_consistency(&self) -> Result<(), ClueError> {
        match self
            .excluded
            .intersection(self.required_letters())
            .iter()
            .next()
        {
            Some(letter) => Err(ClueError::ContradictoryClue(letter as char)),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Clues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "known={}", self.known)?;
        write!(f, " misplaced=[")?;
        for (i, pair) in self.misplaced.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{pair}")?;
        }
        write!(f, "] excluded={}", self.excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn known_pattern_rejects_wrong_length() {
        assert_eq!(
            KnownPattern::new(&[None, None, None]),
            Err(ClueError::InvalidPatternLength(3))
        );
        assert_eq!(
            KnownPattern::parse("a_____"),
            Err(ClueError::InvalidPatternLength(6))
        );
    }

    #[test]
    fn known_pattern_rejects_non_letters() {
        assert_eq!(
            KnownPattern::new(&[Some('1'), None, None, None, None]),
            Err(ClueError::InvalidLetter('1'))
        );
    }

    #[test]
    fn known_pattern_normalizes_case() {
        let pattern = KnownPattern::new(&[Some('A'), None, None, Some('L'), None]).unwrap();
        assert_eq!(pattern.to_string(), "a__l_");
        assert_eq!(pattern.constrained().collect::<Vec<_>>(), vec![(0, b'a'), (3, b'l')]);
    }

    #[test]
    fn known_pattern_blank_styles() {
        let a = KnownPattern::parse("a___e").unwrap();
        let b = KnownPattern::parse("a.?-e").unwrap();
        let c = KnownPattern::parse("a   e").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn known_pattern_set_slot() {
        let mut pattern = KnownPattern::EMPTY;
        pattern.set(2, Some('R')).unwrap();
        assert_eq!(pattern.slot(2), Some(b'r'));
        pattern.set(2, None).unwrap();
        assert!(pattern.is_empty());
        assert_eq!(pattern.set(5, Some('a')), Err(ClueError::InvalidPosition(5)));
    }

    #[test]
    fn known_pattern_matching() {
        let pattern = KnownPattern::parse("ap__e").unwrap();
        assert!(pattern.matches(&word("apple")));
        assert!(!pattern.matches(&word("angle")));
        assert!(KnownPattern::EMPTY.matches(&word("zesty")));
    }

    #[test]
    fn positional_exclusion_rejects_bad_input() {
        assert_eq!(
            PositionalExclusion::new(5, 't'),
            Err(ClueError::InvalidPosition(5))
        );
        assert_eq!(
            PositionalExclusion::new(0, '#'),
            Err(ClueError::InvalidLetter('#'))
        );
    }

    #[test]
    fn positional_exclusion_matching() {
        let pair = PositionalExclusion::new(0, 'T').unwrap();
        assert!(pair.matches(&word("stalk")));
        assert!(!pair.matches(&word("trace")));
        assert!(!pair.matches(&word("crane")));
        // Present elsewhere as well as at the excluded position still fails
        assert!(!pair.matches(&word("tacit")));
    }

    #[test]
    fn clues_new_validates_everything() {
        assert_eq!(
            Clues::new(&[None; 4], &[], &[]),
            Err(ClueError::InvalidPatternLength(4))
        );
        assert_eq!(
            Clues::new(&[None; 5], &[(9, 'a')], &[]),
            Err(ClueError::InvalidPosition(9))
        );
        assert_eq!(
            Clues::new(&[None; 5], &[], &['!']),
            Err(ClueError::InvalidLetter('!'))
        );
    }

    #[test]
    fn misplaced_pairs_deduplicate() {
        let clues = Clues::new(&[None; 5], &[(1, 'r'), (1, 'R'), (3, 'r')], &[]).unwrap();
        assert_eq!(clues.misplaced().len(), 2);
    }

    #[test]
    fn misplaced_row() {
        let mut clues = Clues::default();
        clues.add_misplaced_row(&KnownPattern::parse("_r__t").unwrap());
        let pairs: Vec<String> = clues.misplaced().map(ToString::to_string).collect();
        assert_eq!(pairs, vec!["r@1", "t@4"]);
    }

    #[test]
    fn exclude_all_skips_separators() {
        let mut clues = Clues::default();
        clues.exclude_all("s, T x").unwrap();
        assert_eq!(clues.excluded().to_string(), "stx");
        assert!(clues.exclude_all("q9").is_err());
    }

    #[test]
    fn empty_clues() {
        assert!(Clues::default().is_empty());
        let clues = Clues::new(&[None; 5], &[], &['z']).unwrap();
        assert!(!clues.is_empty());
    }

    #[test]
    fn consistency_check_reports_contradiction() {
        let known = Clues::new(&[Some('s'), None, None, None, None], &[], &['s']).unwrap();
        assert_eq!(
            known.check_consistency(),
            Err(ClueError::ContradictoryClue('s'))
        );

        let misplaced = Clues::new(&[None; 5], &[(2, 'r')], &['r']).unwrap();
        assert_eq!(
            misplaced.check_consistency(),
            Err(ClueError::ContradictoryClue('r'))
        );

        let fine = Clues::new(&[None; 5], &[(2, 'r')], &['s']).unwrap();
        assert!(fine.check_consistency().is_ok());
    }

    #[test]
    fn record_feedback() {
        let guess = word("crane");
        let feedback = Feedback::parse("-Y-GG").unwrap();
        let clues = Clues::from_feedback(&guess, feedback);

        assert_eq!(clues.known().to_string(), "___ne");
        assert_eq!(
            clues.misplaced().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["r@1"]
        );
        assert_eq!(clues.excluded().to_string(), "ac");
    }

    #[test]
    fn record_gray_duplicate_of_present_letter() {
        // EERIE against CRANE: only the last E is in the word
        let guess = word("eerie");
        let secret = word("crane");
        let clues = Clues::from_feedback(&guess, Feedback::calculate(&guess, &secret));

        assert_eq!(clues.known().slot(4), Some(b'e'));
        assert!(!clues.excluded().contains(b'e'));
        assert!(clues.excluded().contains(b'i'));
        assert!(clues.check_consistency().is_ok());
        assert!(clues.misplaced().any(|p| p.letter() == b'e' && p.position() == 0));
    }

    #[test]
    fn record_accumulates_across_guesses() {
        let secret = word("stalk");
        let mut clues = Clues::default();
        for guess in ["crane", "tilts"] {
            let guess = word(guess);
            clues.record(&guess, Feedback::calculate(&guess, &secret));
        }
        assert!(clues.check_consistency().is_ok());
        assert_eq!(clues.known().slot(2), Some(b'a'));
        assert!(clues.required_letters().contains(b't'));
        assert!(clues.required_letters().contains(b's'));
    }

    #[test]
    fn display_summary() {
        let clues = Clues::new(&[Some('a'), None, None, None, None], &[(0, 't')], &['s']).unwrap();
        assert_eq!(clues.to_string(), "known=a____ misplaced=[t@0] excluded=s");
    }
}
