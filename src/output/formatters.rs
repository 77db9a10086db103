//! Formatting utilities for terminal output

use crate::core::{Clues, KnownPattern, WORD_LENGTH};

/// Render a known pattern as spaced uppercase cells, `_` for blanks
///
/// # Examples
/// ```
/// use wordle_sieve::core::KnownPattern;
/// use wordle_sieve::output::formatters::pattern_cells;
///
/// let pattern = KnownPattern::parse("a___e").unwrap();
/// assert_eq!(pattern_cells(&pattern), "A _ _ _ E");
/// ```
#[must_use]
pub fn pattern_cells(pattern: &KnownPattern) -> String {
    (0..WORD_LENGTH)
        .map(|pos| {
            pattern
                .slot(pos)
                .map_or('_', |letter| char::from(letter.to_ascii_uppercase()))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per clue kind, empty kinds omitted
#[must_use]
pub fn clue_summary(clues: &Clues) -> Vec<String> {
    let mut lines = Vec::new();

    if !clues.known().is_empty() {
        lines.push(format!("Known:     {}", pattern_cells(clues.known())));
    }

    let pairs: Vec<String> = clues
        .misplaced()
        .map(|p| {
            format!(
                "{} not at {}",
                char::from(p.letter().to_ascii_uppercase()),
                p.position() + 1
            )
        })
        .collect();
    if !pairs.is_empty() {
        lines.push(format!("Misplaced: {}", pairs.join(", ")));
    }

    if !clues.excluded().is_empty() {
        lines.push(format!(
            "Excluded:  {}",
            clues.excluded().to_string().to_uppercase()
        ));
    }

    lines
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter share (0.0 to 1.0) as a bar
#[must_use]
pub fn frequency_bar(share: f64, width: usize) -> String {
    create_progress_bar(share, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_cells_empty() {
        assert_eq!(pattern_cells(&KnownPattern::EMPTY), "_ _ _ _ _");
    }

    #[test]
    fn clue_summary_lists_each_kind() {
        let clues = Clues::new(
            &[Some('a'), None, None, None, None],
            &[(0, 't'), (3, 'r')],
            &['s', 'x'],
        )
        .unwrap();

        assert_eq!(
            clue_summary(&clues),
            vec![
                "Known:     A _ _ _ _".to_string(),
                "Misplaced: T not at 1, R not at 4".to_string(),
                "Excluded:  SX".to_string(),
            ]
        );
    }

    #[test]
    fn clue_summary_no_clues() {
        assert!(clue_summary(&Clues::default()).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn frequency_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
        assert_eq!(frequency_bar(0.25, 8), "██░░░░░░");
    }
}
