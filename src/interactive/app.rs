//! TUI application state and logic

use crate::commands::{QueryMatch, QueryResult, query_clues};
use crate::core::{Clues, KnownPattern, WORD_LENGTH, normalize_letter};
use crate::error::ClueError;
use crate::ranker::Limit;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Rows of excluded-letter cells below the known and unknown rows
pub const EXCLUDED_ROWS: usize = 5;
pub const GRID_ROWS: usize = 2 + EXCLUDED_ROWS;

const OPENERS_SHOWN: usize = 20;

/// What a grid row's letters mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Letter is at this position
    Known,
    /// Letter is in the word but not at this position
    Unknown,
    /// Letter is not in the word
    Excluded,
}

impl RowKind {
    #[must_use]
    pub const fn of_row(row: usize) -> Self {
        match row {
            0 => Self::Known,
            1 => Self::Unknown,
            _ => Self::Excluded,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Known => "Known positions",
            Self::Unknown => "Unknown positions",
            Self::Excluded => "Excluded letters",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    pub row: usize,
    pub col: usize,
}

impl Focus {
    const fn index(self) -> usize {
        self.row * WORD_LENGTH + self.col
    }

    const fn from_index(index: usize) -> Self {
        Self {
            row: index / WORD_LENGTH,
            col: index % WORD_LENGTH,
        }
    }
}

const LAST_CELL: usize = GRID_ROWS * WORD_LENGTH - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Results,
    Openers,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

/// Application state
pub struct App<'a> {
    session: Session<'a>,
    /// Lowercase letters per cell, `None` when empty
    pub grid: [[Option<u8>; WORD_LENGTH]; GRID_ROWS],
    pub focus: Focus,
    pub view: View,
    pub max_results: usize,
    pub result: Option<QueryResult>,
    pub openers: Vec<QueryMatch>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>, max_results: usize) -> Self {
        let openers = session
            .openers(Limit::new(OPENERS_SHOWN))
            .into_iter()
            .map(|scored| QueryMatch {
                word: scored.word.text().to_string(),
                score: Some(scored.score),
            })
            .collect();

        Self {
            session,
            grid: [[None; WORD_LENGTH]; GRID_ROWS],
            focus: Focus::default(),
            view: View::Results,
            max_results,
            result: None,
            openers,
            messages: vec![
                Message {
                    text: "Type clue letters into the grid, Enter to search.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Green = known spot, yellow = wrong spot, gray = not in word".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    #[must_use]
    pub fn corpus_size(&self) -> usize {
        self.session.corpus().len()
    }

    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.grid[row][col]
    }

    /// Turn the grid into clues
    ///
    /// # Errors
    ///
    /// Returns a `ClueError` if a cell holds something other than a letter.
    pub fn clues(&self) -> Result<Clues, ClueError> {
        let to_slots = |row: &[Option<u8>; WORD_LENGTH]| -> Vec<Option<char>> {
            row.iter().map(|cell| cell.map(char::from)).collect()
        };

        let known = KnownPattern::new(&to_slots(&self.grid[0]))?;
        let unknown = KnownPattern::new(&to_slots(&self.grid[1]))?;

        let mut clues = Clues::default().with_known(known);
        clues.add_misplaced_row(&unknown);
        for row in &self.grid[2..] {
            for letter in row.iter().flatten() {
                clues.exclude(char::from(*letter))?;
            }
        }
        Ok(clues)
    }

    /// Filter and rank with the grid's clues
    pub fn submit(&mut self) {
        let clues = match self.clues() {
            Ok(clues) => clues,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let result = query_clues(&self.session, clues, Limit::new(self.max_results), true);
        debug!(
            total = result.total_matches,
            shown = result.matches.len(),
            "grid query"
        );

        if let Some(err) = &result.contradiction {
            self.add_message(&format!("Warning: {err}"), MessageStyle::Warning);
        }

        match result.total_matches {
            0 => self.add_message("No words match these clues", MessageStyle::Error),
            1 => self.add_message("1 word matches", MessageStyle::Success),
            n if result.truncated => self.add_message(
                &format!(
                    "{n} words match, too many to show. Showing top {}",
                    result.matches.len()
                ),
                MessageStyle::Warning,
            ),
            n => self.add_message(&format!("{n} words match"), MessageStyle::Success),
        }

        self.result = Some(result);
        self.view = View::Results;
    }

    pub fn clear(&mut self) {
        self.grid = [[None; WORD_LENGTH]; GRID_ROWS];
        self.focus = Focus::default();
        self.result = None;
        self.add_message("Grid cleared", MessageStyle::Info);
    }

    pub fn toggle_openers(&mut self) {
        self.view = match self.view {
            View::Results => View::Openers,
            View::Openers => View::Results,
        };
    }

    /// Fill the focused cell and advance
    pub fn type_letter(&mut self, ch: char) {
        match normalize_letter(ch) {
            Ok(letter) => {
                self.grid[self.focus.row][self.focus.col] = Some(letter);
                self.move_by(1);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Clear the focused cell, or step back and clear when it is already empty
    pub fn backspace(&mut self) {
        if self.grid[self.focus.row][self.focus.col].is_none() {
            self.move_by(-1);
        }
        self.grid[self.focus.row][self.focus.col] = None;
    }

    /// Clear the focused cell and step back
    pub fn delete(&mut self) {
        self.grid[self.focus.row][self.focus.col] = None;
        self.move_by(-1);
    }

    /// Move focus through the cells in reading order, stopping at the ends
    pub fn move_by(&mut self, delta: isize) {
        let index = self.focus.index().saturating_add_signed(delta).min(LAST_CELL);
        self.focus = Focus::from_index(index);
    }

    /// Move focus one row up or down, keeping the column
    pub fn move_row(&mut self, delta: isize) {
        self.focus.row = self
            .focus
            .row
            .saturating_add_signed(delta)
            .min(GRID_ROWS - 1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::Char('o') if ctrl => self.toggle_openers(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left | KeyCode::BackTab => self.move_by(-1),
            KeyCode::Right | KeyCode::Tab => self.move_by(1),
            KeyCode::Up => self.move_row(-1),
            KeyCode::Down => self.move_row(1),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
