//! Interactive clue grid
//!
//! A ratatui front end: type known, misplaced and excluded letters into a
//! grid and see the ranked matches update on Enter.

mod app;
mod rendering;

pub use app::{App, EXCLUDED_ROWS, Focus, GRID_ROWS, Message, MessageStyle, RowKind, View, run_tui};
