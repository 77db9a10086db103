//! TUI rendering with ratatui
//!
//! Clue grid on the left, matches and messages on the right.

use super::app::{App, GRID_ROWS, MessageStyle, RowKind, View};
use crate::commands::QueryMatch;
use crate::core::WORD_LENGTH;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(40), // Clue grid
            Constraint::Min(20),    // Results
        ])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_results(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORDLE SIEVE - Clue Grid")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(GRID_ROWS as u16 + 7), // Grid plus labels
            Constraint::Min(4),                       // Messages
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

const fn row_color(kind: RowKind) -> Color {
    match kind {
        RowKind::Known => Color::Green,
        RowKind::Unknown => Color::Yellow,
        RowKind::Excluded => Color::Gray,
    }
}

fn cell_span(app: &App, row: usize, col: usize) -> Span<'static> {
    let kind = RowKind::of_row(row);
    let focused = app.focus.row == row && app.focus.col == col;

    let (text, mut style) = match app.cell(row, col) {
        Some(letter) => (
            format!(" {} ", char::from(letter.to_ascii_uppercase())),
            Style::default()
                .fg(Color::Black)
                .bg(row_color(kind))
                .add_modifier(Modifier::BOLD),
        ),
        None => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
    };

    if focused {
        style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
    }
    Span::styled(text, style)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for row in 0..GRID_ROWS {
        let kind = RowKind::of_row(row);
        if row < 3 {
            if row > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                kind.label(),
                Style::default().fg(row_color(kind)),
            )));
        }

        let mut spans = vec![Span::raw("  ")];
        for col in 0..WORD_LENGTH {
            spans.push(cell_span(app, row, col));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Clues ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn match_items(matches: &[QueryMatch]) -> Vec<ListItem<'static>> {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let mut spans = vec![
                Span::styled(
                    format!("{:>3}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    m.word.to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(score) = m.score {
                spans.push(Span::styled(
                    format!("  {score}"),
                    Style::default().fg(Color::Cyan),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect()
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    match app.view {
        View::Openers => {
            let list = List::new(match_items(&app.openers)).block(
                Block::default()
                    .title(" Best Openers (Ctrl-O to return) ")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
            f.render_widget(list, area);
        }
        View::Results => match &app.result {
            Some(result) => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3), Constraint::Min(3)])
                    .split(area);

                let d = &result.diagnostics;
                let passes = Paragraph::new(format!(
                    "{} → {} known → {} misplaced → {} excluded",
                    d.corpus, d.after_known, d.after_misplaced, d.after_excluded
                ))
                .block(
                    Block::default()
                        .title(" Filter Passes ")
                        .borders(Borders::ALL),
                )
                .wrap(Wrap { trim: true });
                f.render_widget(passes, chunks[0]);

                let title = if result.truncated {
                    format!(
                        " Matches: top {} of {} (too many to show) ",
                        result.matches.len(),
                        result.total_matches
                    )
                } else {
                    format!(" Matches: {} ", result.total_matches)
                };
                let list = List::new(match_items(&result.matches)).block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .style(Style::default().fg(Color::Green)),
                );
                f.render_widget(list, chunks[1]);
            }
            None => {
                let paragraph = Paragraph::new(vec![
                    Line::from(format!("{} words loaded", app.corpus_size())),
                    Line::from("Press Enter to search"),
                ])
                .block(
                    Block::default()
                        .title(" Matches ")
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                );
                f.render_widget(paragraph, area);
            }
        },
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    let kind = RowKind::of_row(app.focus.row);
    let position = Paragraph::new(format!("{} · slot {}", kind.label(), app.focus.col + 1))
        .alignment(Alignment::Center)
        .style(Style::default().fg(row_color(kind)));
    f.render_widget(position, chunks[0]);

    let help = Paragraph::new(
        "Enter: Search | Arrows/Tab: Move | Ctrl-O: Openers | Ctrl-L: Reset | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
