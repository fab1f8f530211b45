//! TUI rendering with ratatui
//!
//! Draws the letter grid, session tally and end-of-game notice.

use super::app::{App, MessageStyle};
use crate::core::{Cell, CellStatus, MAX_GUESSES, WORD_LENGTH};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Min(20),    // Main content
            Constraint::Length(3),  // Notice area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_notice(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Visual style for a cell: (tile style, border style)
#[must_use]
pub fn cell_style(status: CellStatus) -> (Style, Style) {
    let bold = Modifier::BOLD;
    match status {
        CellStatus::Empty => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        ),
        CellStatus::Typing => (
            Style::default().fg(Color::White).add_modifier(bold),
            Style::default().fg(Color::White),
        ),
        CellStatus::Correct => (
            Style::default().fg(Color::White).bg(Color::Green).add_modifier(bold),
            Style::default().fg(Color::Green),
        ),
        CellStatus::Absent => (
            Style::default().fg(Color::White).bg(Color::DarkGray).add_modifier(bold),
            Style::default().fg(Color::DarkGray),
        ),
        CellStatus::Present => (
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(bold),
            Style::default().fg(Color::Yellow),
        ),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = vec![
        Line::from(Span::styled(
            "W A R D L E",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Let's start a "),
            Span::styled("War", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" now"),
        ]),
    ];

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let state = app.state();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); MAX_GUESSES])
        .flex(Flex::Center)
        .split(inner);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(7); WORD_LENGTH])
            .spacing(1u16)
            .flex(Flex::Center)
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            let at_cursor = state.status() == GameStatus::InProgress
                && row_index == state.active_row()
                && col == state.cursor();
            render_cell(f, state.board().cell(row_index, col), at_cursor, *cell_area);
        }
    }
}

fn render_cell(f: &mut Frame, cell: Cell, at_cursor: bool, area: Rect) {
    let (tile_style, mut border_style) = cell_style(cell.status());
    if at_cursor {
        border_style = Style::default().fg(Color::Cyan);
    }

    let letter = cell.letter().map(String::from).unwrap_or_default();
    let tile = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(tile_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
    f.render_widget(tile, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_GUESSES as u16 + 4), // Session stats
            Constraint::Min(5),                         // Messages
        ])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![
        Line::from(format!(
            "Games: {} | Won: {} | Win Rate: {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(""),
    ];

    for guesses in 1..=MAX_GUESSES {
        let count = stats.guess_distribution[guesses];
        let bar_len = count * 16 / max;
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| ListItem::new(msg.text.clone()).style(message_style(msg.style)))
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

const fn message_style(style: MessageStyle) -> Style {
    match style {
        MessageStyle::Info => Style::new().fg(Color::White),
        MessageStyle::Success => Style::new().fg(Color::Green),
        MessageStyle::Error => Style::new().fg(Color::Red),
    }
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let color = match notice.style {
        MessageStyle::Success => Color::Green,
        MessageStyle::Error => Color::Red,
        MessageStyle::Info => Color::Cyan,
    };

    let paragraph = Paragraph::new(notice.text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Game Over | Enter/r: Reset ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let help = if state.status().is_over() {
        "Enter/r: Play again | q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let guess = if state.status().is_over() {
        state.settled_rows()
    } else {
        state.active_row() + 1
    };

    let text = format!("Guess {guess}/{MAX_GUESSES} | {help}");
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
